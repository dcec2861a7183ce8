//! The week of price samples attached to each asset quote.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Number of samples in a sparkline: one per day over the past week.
pub const SPARKLINE_LEN: usize = 7;

/// An error that can occur when building a `Sparkline` from a slice.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SparklineError {
    /// The slice did not contain exactly one sample per day of the week.
    #[error("expected {SPARKLINE_LEN} sparkline samples, got {0}")]
    WrongSampleCount(usize),
}

/// An ordered week of relative price samples, oldest first.
///
/// The fixed-length array makes the "exactly 7 entries" invariant a property
/// of the type rather than a runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sparkline([f64; SPARKLINE_LEN]);

impl Sparkline {
    /// Wraps a full week of samples.
    pub fn new(samples: [f64; SPARKLINE_LEN]) -> Self {
        Self(samples)
    }

    /// Builds a sparkline from a slice, failing unless it holds exactly
    /// [`SPARKLINE_LEN`] samples.
    pub fn from_slice(samples: &[f64]) -> Result<Self, SparklineError> {
        let samples: [f64; SPARKLINE_LEN] = samples
            .try_into()
            .map_err(|_| SparklineError::WrongSampleCount(samples.len()))?;
        Ok(Self(samples))
    }

    /// Returns the raw samples, oldest first.
    pub fn samples(&self) -> &[f64; SPARKLINE_LEN] {
        &self.0
    }

    /// Yields chart-ready points: the 1-based day position on the domain axis
    /// plus the raw sample value.
    pub fn points(&self) -> impl Iterator<Item = SparklinePoint> + '_ {
        self.0.iter().enumerate().map(|(index, &value)| SparklinePoint {
            position: index + 1,
            value,
        })
    }
}

/// One chart-ready point derived from a sparkline sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparklinePoint {
    /// 1-based day index along the domain axis.
    pub position: usize,
    /// The sample value at that day.
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_one_based_and_ordered() {
        let sparkline = Sparkline::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let points: Vec<_> = sparkline.points().collect();

        assert_eq!(points.len(), SPARKLINE_LEN);
        assert_eq!(points[0].position, 1);
        assert_eq!(points[6].position, 7);
        assert_eq!(points[3].value, 4.0);
    }

    #[test]
    fn from_slice_rejects_wrong_lengths() {
        assert_eq!(
            Sparkline::from_slice(&[1.0, 2.0, 3.0]),
            Err(SparklineError::WrongSampleCount(3))
        );
        assert_eq!(
            Sparkline::from_slice(&[0.0; 8]),
            Err(SparklineError::WrongSampleCount(8))
        );
        assert!(Sparkline::from_slice(&[0.5; SPARKLINE_LEN]).is_ok());
    }
}
