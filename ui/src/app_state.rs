use std::ops::Deref;
use std::sync::Arc;

use api::fiat_currency::FiatCurrency;

/// Immutable application-wide state, provided once as a Dioxus context.
#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    /// The currency the dashboard's quotes are denominated in.
    pub display_currency: FiatCurrency,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(display_currency: FiatCurrency) -> Self {
        Self(Arc::new(AppStateData { display_currency }))
    }
}
