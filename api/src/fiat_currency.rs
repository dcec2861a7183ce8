//! Defines the fiat currencies the dashboard can denominate prices in.

use serde::Deserialize;
use serde::Serialize;

/// A fiat currency, carrying its code, symbol, and formatting rules.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    AUD, // Australian Dollar
    CAD, // Canadian Dollar
    CHF, // Swiss Franc
    CNY, // Chinese Yuan
    EUR, // Euro
    GBP, // Great British Pound
    JPY, // Japanese Yen
    #[default]
    USD, // United States Dollar
}

impl FiatCurrency {
    /// Returns the number of decimal digits used by the currency.
    ///
    /// Most currencies use 2 (cents); JPY uses 0.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the graphical symbol for the currency (e.g. '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::AUD => "$",
            Self::CAD => "$",
            Self::CHF => "CHF",
            Self::CNY => "¥",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
            Self::USD => "$",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g. "USD").
    /// Handled by the `strum::IntoStaticStr` derive.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AUD => "Australian Dollar",
            Self::CAD => "Canadian Dollar",
            Self::CHF => "Swiss Franc",
            Self::CNY => "Chinese Yuan",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::JPY => "Japanese Yen",
            Self::USD => "United States Dollar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn code_round_trips_through_from_str() {
        assert_eq!(FiatCurrency::USD.code(), "USD");
        assert_eq!(FiatCurrency::from_str("usd"), Ok(FiatCurrency::USD));
        assert_eq!(FiatCurrency::from_str("EUR"), Ok(FiatCurrency::EUR));
    }

    #[test]
    fn decimals_per_currency() {
        assert_eq!(FiatCurrency::USD.decimals(), 2);
        assert_eq!(FiatCurrency::JPY.decimals(), 0);
    }
}
