//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use dioxus::prelude::*;

use api::asset_quote::AssetQuote;

use crate::components::asset_card::AssetCard;
use crate::components::pico::Card;

/// The list of asset cards shown once quotes are available.
///
/// Kept separate from the screen so the ready state is a pure function of the
/// quote list. Cards are keyed by `id` and preserve input order.
#[component]
pub fn AssetList(quotes: Vec<AssetQuote>) -> Element {
    rsx! {
        div {
            class: "asset-list",
            for quote in quotes {
                AssetCard {
                    key: "{quote.id}",
                    quote: quote.clone(),
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn DashboardScreen() -> Element {
    // `use_resource` runs the fetch once per mount; the screen re-renders
    // when it resolves. No polling or refresh is wired up.
    let mut quotes = use_resource(move || async move { api::quotes().await });

    rsx! {
        match &*quotes.read() {
            // The resource is still loading or has not been run yet.
            None => {
                rsx! {
                    Card {
                        h3 { "Markets" }
                        p { "Loading cryptocurrency data..." }
                        progress {} // An indeterminate progress bar
                    }
                }
            }
            // The async task finished successfully.
            Some(Ok(list)) => {
                rsx! {
                    AssetList {
                        quotes: list.clone(),
                    }
                }
            }
            // Unreachable with the synthetic provider; kept so a real data
            // source surfaces failures without crashing the render tree.
            Some(Err(e)) => {
                rsx! {
                    Card {
                        h3 { "Error" }
                        p { "Failed to load quotes: {e}" }
                        button {
                            onclick: move |_| quotes.restart(),
                            "Retry"
                        }
                    }
                }
            }
        }
    }
}
