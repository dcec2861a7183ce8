//! Signed 24-hour percentage changes with exact two-decimal rendering.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// The visual direction of a change, keyed on its sign.
///
/// Both the change indicator and the sparkline stroke take their styling from
/// this; a change of exactly zero counts as `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// CSS class shared by the change indicator and the chart.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Stroke color for the sparkline path.
    pub fn stroke(&self) -> &'static str {
        match self {
            Self::Up => "#10b981",
            Self::Down => "#ef4444",
        }
    }

    /// Arrow glyph rendered beside the change figure.
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↗",
            Self::Down => "↘",
        }
    }
}

/// A signed percentage stored in basis points (hundredths of a percent).
///
/// Storing hundredths as an integer keeps the two-decimal display exact: a
/// change of 2.5 always renders as "2.50%", never "2.49999...%".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentChange {
    basis_points: i64,
}

impl PercentChange {
    /// Creates a change from a percentage value, rounding to the nearest
    /// hundredth of a percent.
    pub fn from_percent(value: f64) -> Self {
        Self {
            basis_points: (value * 100.0).round() as i64,
        }
    }

    /// Creates a change directly from basis points (250 means +2.50%).
    pub fn from_basis_points(basis_points: i64) -> Self {
        Self { basis_points }
    }

    /// Returns the raw basis-point value.
    pub fn as_basis_points(&self) -> i64 {
        self.basis_points
    }

    /// Maps the sign onto a [`Trend`]; non-negative changes trend up.
    pub fn trend(&self) -> Trend {
        if self.basis_points >= 0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// Renders with exactly two decimal digits and a trailing '%' (e.g. "2.50%").
impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.basis_points < 0 { "-" } else { "" };
        let abs = self.basis_points.unsigned_abs();
        write!(f, "{}{}.{:02}%", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_change_renders_two_decimals() {
        let change = PercentChange::from_percent(2.5);
        assert_eq!(change.to_string(), "2.50%");
        assert_eq!(change.trend(), Trend::Up);
    }

    #[test]
    fn negative_change_below_one_percent_keeps_sign() {
        let change = PercentChange::from_percent(-0.5);
        assert_eq!(change.to_string(), "-0.50%");
        assert_eq!(change.trend(), Trend::Down);
    }

    #[test]
    fn zero_counts_as_up() {
        let change = PercentChange::from_basis_points(0);
        assert_eq!(change.to_string(), "0.00%");
        assert_eq!(change.trend(), Trend::Up);
    }

    #[test]
    fn from_percent_rounds_to_basis_points() {
        assert_eq!(PercentChange::from_percent(1.8).as_basis_points(), 180);
        assert_eq!(PercentChange::from_percent(-0.005).as_basis_points(), -1);
    }
}
