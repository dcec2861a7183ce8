//! This crate contains the quote data model and fetching logic shared by all
//! front ends.

pub mod asset_quote;
pub mod fiat_amount;
pub mod fiat_currency;
pub mod percent_change;
pub mod prefs;
pub mod quote_providers;
pub mod sparkline;

use asset_quote::AssetQuote;
use prefs::user_prefs::UserPrefs;
use quote_providers::synthetic::Synthetic;
use quote_providers::QuoteProvider;
use quote_providers::QuoteProviderKind;

pub type ApiError = anyhow::Error;

/// Retrieves the current list of asset quotes from the configured provider.
///
/// The provider is selected via [`UserPrefs`]. Only the synthetic provider
/// exists today, so this constructs the list in memory and cannot fail in
/// practice; the `Result` stays in the signature so a network-backed provider
/// can slot in behind the same operation.
pub async fn quotes() -> Result<Vec<AssetQuote>, ApiError> {
    let prefs = UserPrefs::default();

    let quotes = match prefs.quote_provider() {
        QuoteProviderKind::Synthetic => Synthetic.fetch_quotes().await?,
    };

    let json = serde_json::to_string(&quotes)?;
    dioxus_logger::tracing::info!("quotes json: {}", json);

    Ok(quotes)
}
