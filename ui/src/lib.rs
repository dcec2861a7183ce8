// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
mod screens;

use api::fiat_currency::FiatCurrency;
use app_state::AppState;
use components::pico::Container;
use screens::dashboard::DashboardScreen;

/// Application styling. Kept inline so the binaries need no asset pipeline.
const APP_CSS: &str = r#"
* { box-sizing: border-box; }

html, body {
    height: 100%;
    width: 100%;
    margin: 0;
    padding: 0;
    background-color: #f9fafb;
    color: #111827;
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
}

.container {
    max-width: 56rem;
    margin: 0 auto;
    padding: 1rem;
}

.page-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 2rem;
}

.page-header h1 {
    margin: 0;
    font-size: 1.75rem;
    font-weight: 700;
}

.currency-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
    background-color: #ffffff;
    padding: 0.5rem 0.75rem;
    border-radius: 0.5rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.08);
    font-weight: 500;
}

.currency-badge-symbol {
    color: #6b7280;
}

.asset-list {
    display: grid;
    gap: 1rem;
}

article {
    background-color: #ffffff;
    border-radius: 0.75rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    padding: 1.25rem;
    margin: 0;
}

.card-head {
    display: flex;
    flex-direction: row;
    align-items: center;
    justify-content: space-between;
    padding-bottom: 0.5rem;
}

.card-head h3 {
    margin: 0;
    font-size: 1.125rem;
    font-weight: 500;
}

.coin-glyph {
    color: #eab308;
    font-size: 1.5rem;
    line-height: 1;
}

.card-stats {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1rem;
}

.price {
    font-size: 1.5rem;
    font-weight: 700;
}

.change {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
}

.change.up { color: #10b981; }
.change.down { color: #ef4444; }

.sparkline {
    display: block;
    width: 100%;
    height: 100px;
}

.grid-line {
    stroke: #e5e7eb;
    stroke-width: 1;
}

progress {
    width: 100%;
}
"#;

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{APP_CSS}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Quotes are denominated in USD; the badge reflects the same state the
    // cards format with.
    use_context_provider(|| AppState::new(FiatCurrency::USD));
    let app_state = use_context::<AppState>();

    rsx! {
        Container {
            header {
                class: "page-header",
                h1 { "Cryptocurrency Tracker" }
                span {
                    class: "currency-badge",
                    title: "{app_state.display_currency.name()}",
                    span {
                        class: "currency-badge-symbol",
                        "{app_state.display_currency.symbol()}"
                    }
                    "{app_state.display_currency.code()}"
                }
            }
            DashboardScreen {}
        }
    }
}
