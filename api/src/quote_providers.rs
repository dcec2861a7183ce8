//! Defines traits and implementations for asset quote providers.

use serde::Deserialize;
use serde::Serialize;

use crate::asset_quote::AssetQuote;
use crate::ApiError;

/// A trait for any service that can provide a list of asset quotes.
///
/// This is the single seam between data acquisition and the view: swapping a
/// real market-data API in for the synthetic provider leaves everything above
/// this trait untouched.
pub trait QuoteProvider {
    /// Fetches the latest quote list.
    async fn fetch_quotes(&self) -> Result<Vec<AssetQuote>, ApiError>;
}

/// Names the available provider implementations, for selection via prefs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum QuoteProviderKind {
    /// In-memory synthetic data; the only provider in the current scope.
    #[default]
    Synthetic,
}

/// Synthesizes quote data in memory, standing in for a real market-data API.
pub mod synthetic {
    use rand::Rng;

    use super::*;
    use crate::fiat_amount::FiatAmount;
    use crate::fiat_currency::FiatCurrency;
    use crate::percent_change::PercentChange;
    use crate::sparkline::Sparkline;
    use crate::sparkline::SPARKLINE_LEN;

    /// Fixed parameters for one synthesized asset.
    struct Listing {
        id: &'static str,
        name: &'static str,
        symbol: &'static str,
        /// Current price, in USD cents.
        price_minor: i64,
        /// 24h change, in basis points.
        change_bp: i64,
        /// Floor of the sparkline's random walk.
        spark_base: f64,
        /// Width of the uniform jitter added to each sparkline sample.
        spark_jitter: f64,
    }

    /// The asset universe the dashboard tracks.
    const LISTINGS: [Listing; 3] = [
        Listing {
            id: "bitcoin",
            name: "Bitcoin",
            symbol: "BTC",
            price_minor: 4_200_000,
            change_bp: 250,
            spark_base: 40_000.0,
            spark_jitter: 5_000.0,
        },
        Listing {
            id: "ethereum",
            name: "Ethereum",
            symbol: "ETH",
            price_minor: 250_000,
            change_bp: 180,
            spark_base: 2_000.0,
            spark_jitter: 1_000.0,
        },
        Listing {
            id: "cardano",
            name: "Cardano",
            symbol: "ADA",
            price_minor: 45,
            change_bp: -50,
            spark_base: 0.4,
            spark_jitter: 0.1,
        },
    ];

    /// An implementation of the `QuoteProvider` trait that fabricates data.
    ///
    /// Each fetch builds a fresh list: prices and changes are fixed, while
    /// every sparkline sample gets bounded uniform jitter above the listing's
    /// base. No I/O of any kind takes place.
    pub struct Synthetic;

    impl QuoteProvider for Synthetic {
        async fn fetch_quotes(&self) -> Result<Vec<AssetQuote>, ApiError> {
            let mut rng = rand::thread_rng();

            let quotes = LISTINGS
                .iter()
                .map(|listing| {
                    let mut samples = [0.0; SPARKLINE_LEN];
                    for sample in &mut samples {
                        *sample = listing.spark_base + rng.gen_range(0.0..listing.spark_jitter);
                    }

                    AssetQuote {
                        id: listing.id.to_string(),
                        name: listing.name.to_string(),
                        symbol: listing.symbol.to_string(),
                        current_price: FiatAmount::new_from_minor(
                            listing.price_minor,
                            FiatCurrency::USD,
                        ),
                        change_percent_24h: PercentChange::from_basis_points(listing.change_bp),
                        sparkline: Sparkline::new(samples),
                    }
                })
                .collect();

            Ok(quotes)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::synthetic::Synthetic;
    use super::*;

    #[tokio::test]
    async fn synthetic_quotes_are_well_formed() {
        let quotes = Synthetic.fetch_quotes().await.unwrap();

        assert_eq!(quotes.len(), 3);

        let ids: HashSet<_> = quotes.iter().map(|quote| quote.id.as_str()).collect();
        assert_eq!(ids.len(), quotes.len(), "ids must be unique");

        for quote in &quotes {
            assert!(quote.current_price.as_minor_units() > 0);
            assert_eq!(quote.sparkline.points().count(), 7);
            for point in quote.sparkline.points() {
                assert!(point.value > 0.0);
            }
        }
    }

    #[tokio::test]
    async fn synthetic_quotes_keep_listing_order() {
        let quotes = Synthetic.fetch_quotes().await.unwrap();
        let ids: Vec<_> = quotes.iter().map(|quote| quote.id.as_str()).collect();
        assert_eq!(ids, ["bitcoin", "ethereum", "cardano"]);
    }

    #[test]
    fn provider_kind_parses_case_insensitively() {
        assert_eq!(
            QuoteProviderKind::from_str("synthetic"),
            Ok(QuoteProviderKind::Synthetic)
        );
        assert_eq!(QuoteProviderKind::default(), QuoteProviderKind::Synthetic);
    }
}
