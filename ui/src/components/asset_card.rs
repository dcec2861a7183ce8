//! A card presenting a single asset quote.

use dioxus::prelude::*;

use api::asset_quote::AssetQuote;

use crate::components::pico::Card;
use crate::components::sparkline_chart::SparklineChart;

/// Renders one asset quote: name, price, 24h change, and the week's
/// sparkline. A pure function of its input, with no hooks or context; the
/// change indicator and the chart line share the same trend styling.
#[component]
pub fn AssetCard(quote: AssetQuote) -> Element {
    let trend = quote.change_percent_24h.trend();

    rsx! {
        Card {
            class: "crypto-card",
            header {
                class: "card-head",
                h3 { "{quote.name} ({quote.symbol})" }
                span { class: "coin-glyph", "₿" }
            }
            div {
                class: "card-stats",
                span {
                    class: "price",
                    "{quote.current_price.to_string_with_symbol()}"
                }
                span {
                    class: "change {trend.css_class()}",
                    span { "{trend.arrow()}" }
                    "{quote.change_percent_24h}"
                }
            }
            SparklineChart {
                sparkline: quote.sparkline,
                trend,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::fiat_amount::FiatAmount;
    use api::fiat_currency::FiatCurrency;
    use api::percent_change::PercentChange;
    use api::sparkline::Sparkline;

    use super::*;

    fn quote(price_minor: i64, change_percent: f64) -> AssetQuote {
        AssetQuote {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            current_price: FiatAmount::new_from_minor(price_minor, FiatCurrency::USD),
            change_percent_24h: PercentChange::from_percent(change_percent),
            sparkline: Sparkline::new([40.0, 41.0, 40.5, 42.0, 43.0, 42.5, 44.0]),
        }
    }

    #[test]
    fn positive_quote_renders_grouped_price_and_up_styling() {
        let html = dioxus_ssr::render_element(rsx! {
            AssetCard { quote: quote(4_200_000, 2.5) }
        });

        assert!(html.contains("Bitcoin (BTC)"));
        assert!(html.contains("$42,000"));
        assert!(html.contains("2.50%"));
        assert!(html.contains("change up"));
    }

    #[test]
    fn negative_quote_renders_signed_change_and_down_styling() {
        let html = dioxus_ssr::render_element(rsx! {
            AssetCard { quote: quote(45, -0.5) }
        });

        assert!(html.contains("$0.45"));
        assert!(html.contains("-0.50%"));
        assert!(html.contains("change down"));
        // the chart line takes the same trend color as the indicator
        assert!(html.contains("#ef4444"));
    }
}
