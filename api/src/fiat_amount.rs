//! Provides a safe, self-contained type for representing fiat currency amounts.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::fiat_currency::FiatCurrency;

/// Represents a monetary value in a specific fiat currency.
///
/// Internally, the amount is stored as a signed 64-bit integer in the currency's
/// smallest unit (e.g., cents for USD) to prevent floating-point inaccuracies.
/// The default `Display` implementation formats this as a plain numeric string;
/// the dashboard itself renders amounts through [`Self::to_string_with_symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiatAmount {
    amount: i64,
    currency: FiatCurrency,
}

impl FiatAmount {
    // --- Getters ---

    /// Returns the currency type of the amount.
    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// Returns the raw amount in the currency's smallest unit (e.g., cents).
    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    // --- Constructors ---

    /// Creates a new `FiatAmount` from a floating-point value, typically from an API.
    ///
    /// The float is converted to the integer representation by rounding to the
    /// nearest minor unit based on the currency's number of decimal places.
    pub fn new_from_float(value: f64, currency: FiatCurrency) -> Self {
        let decimals = currency.decimals();
        let multiplier = 10_f64.powi(decimals as i32);
        let amount = (value * multiplier).round() as i64;

        Self { amount, currency }
    }

    /// Creates a new `FiatAmount` directly from its smallest unit.
    ///
    /// # Example
    /// ```
    /// use api::fiat_amount::FiatAmount;
    /// use api::fiat_currency::FiatCurrency;
    ///
    /// // 12345 cents represents $123.45
    /// let amount = FiatAmount::new_from_minor(12345, FiatCurrency::USD);
    /// assert_eq!(amount.to_string(), "123.45");
    /// ```
    pub fn new_from_minor(amount: i64, currency: FiatCurrency) -> Self {
        Self { amount, currency }
    }

    // --- Display Methods ---

    /// Formats the amount with thousands separators, dropping the fractional
    /// part when it is zero (e.g. "42,000", "0.45", "1,234.5").
    pub fn to_grouped_string(&self) -> String {
        let decimals = self.currency.decimals() as u32;
        let negative = self.amount < 0;

        if decimals == 0 {
            return group_digits(self.amount.unsigned_abs(), negative);
        }

        let divisor = 10_i64.pow(decimals);
        let major = self.amount.unsigned_abs() / divisor as u64;
        let minor = self.amount.unsigned_abs() % divisor as u64;

        let mut out = group_digits(major, negative);
        if minor != 0 {
            let frac = format!("{:0width$}", minor, width = decimals as usize);
            out.push('.');
            out.push_str(frac.trim_end_matches('0'));
        }
        out
    }

    /// Formats the grouped amount with its currency symbol (e.g., "$42,000").
    pub fn to_string_with_symbol(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.to_grouped_string())
    }

    /// Formats the grouped amount with its currency code (e.g., "42,000 USD").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self.to_grouped_string(), self.currency.code())
    }
}

/// Inserts a thousands separator every three digits, left of the decimal point.
fn group_digits(value: u64, negative: bool) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats the amount as a plain numeric string (e.g., "25.34"), ungrouped and
/// at the currency's full precision.
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;

        if decimals == 0 {
            return write!(f, "{}", self.amount);
        }

        let divisor = 10_i64.pow(decimals as u32);
        let major_units = self.amount / divisor;
        let minor_units = self.amount.abs() % divisor;

        write!(
            f,
            "{}.{:0width$}",
            major_units,
            minor_units,
            width = decimals
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_form_groups_thousands_and_drops_zero_cents() {
        let price = FiatAmount::new_from_minor(4_200_000, FiatCurrency::USD);
        assert_eq!(price.to_string_with_symbol(), "$42,000");

        let price = FiatAmount::new_from_minor(250_000, FiatCurrency::USD);
        assert_eq!(price.to_string_with_symbol(), "$2,500");
    }

    #[test]
    fn symbol_form_keeps_nonzero_fraction() {
        let price = FiatAmount::new_from_minor(45, FiatCurrency::USD);
        assert_eq!(price.to_string_with_symbol(), "$0.45");

        // trailing zeros in the fraction are trimmed
        let price = FiatAmount::new_from_minor(123_450, FiatCurrency::USD);
        assert_eq!(price.to_string_with_symbol(), "$1,234.5");
    }

    #[test]
    fn zero_decimal_currency_groups_whole_units() {
        let price = FiatAmount::new_from_minor(1_250_000, FiatCurrency::JPY);
        assert_eq!(price.to_string_with_symbol(), "¥1,250,000");
    }

    #[test]
    fn code_form_appends_iso_code() {
        let price = FiatAmount::new_from_minor(4_200_000, FiatCurrency::USD);
        assert_eq!(price.to_string_with_code(), "42,000 USD");
    }

    #[test]
    fn new_from_float_rounds_to_minor_units() {
        let amount = FiatAmount::new_from_float(123.456, FiatCurrency::USD);
        assert_eq!(amount.as_minor_units(), 12346);
    }

    #[test]
    fn display_is_plain_and_full_precision() {
        let amount = FiatAmount::new_from_minor(4_200_000, FiatCurrency::USD);
        assert_eq!(amount.to_string(), "42000.00");
    }

    #[test]
    fn negative_amounts_carry_the_sign_once() {
        let amount = FiatAmount::new_from_minor(-123_456, FiatCurrency::USD);
        assert_eq!(amount.to_grouped_string(), "-1,234.56");
    }
}
