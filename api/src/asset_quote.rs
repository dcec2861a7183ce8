//! The per-asset snapshot displayed by the dashboard.

use serde::Deserialize;
use serde::Serialize;

use crate::fiat_amount::FiatAmount;
use crate::percent_change::PercentChange;
use crate::sparkline::Sparkline;

/// One asset's price and metadata snapshot.
///
/// Quotes are immutable once constructed: the provider builds a fresh list on
/// every fetch and the view only ever reads it. `id` is unique within a list
/// and doubles as the render key for the asset's card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetQuote {
    /// Unique identifier within a quote list (e.g. "bitcoin").
    pub id: String,
    /// Display name (e.g. "Bitcoin").
    pub name: String,
    /// Ticker abbreviation (e.g. "BTC").
    pub symbol: String,
    /// Latest traded price.
    pub current_price: FiatAmount,
    /// Signed price change over the past 24 hours, in percentage points.
    pub change_percent_24h: PercentChange,
    /// Relative price samples over the past week, oldest first.
    pub sparkline: Sparkline,
}
