use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::quote_providers::QuoteProviderKind;

/// Represents all user prefs. Intended for saving to a file, editing in a
/// settings dialog, etc. For now it is populated from environment variables.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    quote_provider: QuoteProviderKind,
}

impl UserPrefs {
    pub fn quote_provider(&self) -> QuoteProviderKind {
        self.quote_provider
    }

    /// Creates a UserPrefs instance from environment variables, with a
    /// conservative in-code default.
    ///
    /// # Environment Variables (case-insensitive):
    /// - `QUOTE_PROVIDER`: name of the quote provider ("synthetic").
    ///   Unset or unrecognized values fall back to the synthetic provider.
    pub fn from_env() -> Self {
        let quote_provider = env::var("QUOTE_PROVIDER")
            .ok()
            .and_then(|s| QuoteProviderKind::from_str(&s).ok())
            .unwrap_or_default();

        Self { quote_provider }
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
