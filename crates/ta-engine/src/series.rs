//! The input series model.
//!
//! A series is a borrowed slice of [`OhlcvPoint`]s ordered by strictly
//! increasing timestamp. The engine never copies or mutates the caller's
//! points; it reads the columns it needs through the [`OhlcvSeries`]
//! extension trait.
//!
//! # Example
//!
//! ```
//! use ta_engine::series::{OhlcvPoint, OhlcvSeries};
//!
//! let bars = vec![
//!     OhlcvPoint::new(1_000, 10.0, 11.0, 9.5, 10.5, 1_200.0),
//!     OhlcvPoint::new(2_000, 10.5, 12.0, 10.0, 11.5, 900.0),
//! ];
//!
//! assert!(bars.validate().is_ok());
//! assert_eq!(bars.closes(), vec![10.5, 11.5]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeriesError};

/// One bar of trade data.
///
/// `low <= min(open, close) <= max(open, close) <= high` is expected but not
/// checked; indicators only read the fields they need and never panic on a
/// bar that breaks the ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OhlcvPoint {
    /// Bar open time in epoch milliseconds.
    pub timestamp: i64,
    /// Opening price.
    pub open: f64,
    /// Highest traded price.
    pub high: f64,
    /// Lowest traded price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl OhlcvPoint {
    /// Creates a bar from its fields.
    #[must_use]
    pub const fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Validates that a series is non-empty and strictly increasing in time.
///
/// Every indicator calls this before reading any data.
///
/// # Errors
///
/// - [`SeriesError::Empty`] if `series` has no points
/// - [`SeriesError::NonIncreasingTimestamp`] for the first point whose
///   timestamp is not greater than its predecessor's
pub fn validate(series: &[OhlcvPoint]) -> Result<()> {
    if series.is_empty() {
        tracing::debug!("rejecting empty series");
        return Err(SeriesError::Empty.into());
    }

    if let Some(index) = series
        .windows(2)
        .position(|pair| pair[1].timestamp <= pair[0].timestamp)
    {
        let previous = series[index].timestamp;
        let current = series[index + 1].timestamp;
        tracing::debug!(
            index = index + 1,
            previous,
            current,
            "rejecting series with non-increasing timestamp"
        );
        return Err(SeriesError::NonIncreasingTimestamp {
            index: index + 1,
            previous,
            current,
        }
        .into());
    }

    Ok(())
}

/// Column access and validation for a slice of bars.
pub trait OhlcvSeries {
    /// Validates the series. See [`validate`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries)
    /// if the series is empty or its timestamps are not strictly increasing.
    fn validate(&self) -> Result<()>;

    /// Returns the timestamp column.
    fn timestamps(&self) -> Vec<i64>;

    /// Returns the close column.
    fn closes(&self) -> Vec<f64>;

    /// Returns the high column.
    fn highs(&self) -> Vec<f64>;

    /// Returns the low column.
    fn lows(&self) -> Vec<f64>;
}

impl OhlcvSeries for [OhlcvPoint] {
    #[inline]
    fn validate(&self) -> Result<()> {
        validate(self)
    }

    fn timestamps(&self) -> Vec<i64> {
        self.iter().map(|p| p.timestamp).collect()
    }

    fn closes(&self) -> Vec<f64> {
        self.iter().map(|p| p.close).collect()
    }

    fn highs(&self) -> Vec<f64> {
        self.iter().map(|p| p.high).collect()
    }

    fn lows(&self) -> Vec<f64> {
        self.iter().map(|p| p.low).collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;

    fn bar(timestamp: i64, close: f64) -> OhlcvPoint {
        OhlcvPoint::new(timestamp, close, close + 1.0, close - 1.0, close, 100.0)
    }

    #[test]
    fn test_validate_accepts_increasing_timestamps() {
        let series = vec![bar(1, 10.0), bar(2, 11.0), bar(5, 12.0)];
        assert!(validate(&series).is_ok());
    }

    #[test]
    fn test_validate_single_point() {
        assert!(validate(&[bar(7, 1.0)]).is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let result = validate(&[]);
        assert_eq!(result, Err(Error::InvalidSeries(SeriesError::Empty)));
    }

    #[test]
    fn test_validate_duplicate_timestamp() {
        let series = vec![bar(1, 10.0), bar(2, 11.0), bar(2, 12.0)];
        let result = validate(&series);
        assert_eq!(
            result,
            Err(Error::InvalidSeries(SeriesError::NonIncreasingTimestamp {
                index: 2,
                previous: 2,
                current: 2,
            }))
        );
    }

    #[test]
    fn test_validate_decreasing_timestamp_reports_first_violation() {
        let series = vec![bar(10, 1.0), bar(5, 1.0), bar(1, 1.0)];
        match validate(&series) {
            Err(Error::InvalidSeries(SeriesError::NonIncreasingTimestamp { index, .. })) => {
                assert_eq!(index, 1);
            }
            other => panic!("expected NonIncreasingTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn test_columns() {
        let series = vec![
            OhlcvPoint::new(1, 1.0, 4.0, 0.5, 2.0, 10.0),
            OhlcvPoint::new(2, 2.0, 5.0, 1.5, 3.0, 20.0),
        ];
        assert_eq!(series.timestamps(), vec![1, 2]);
        assert_eq!(series.closes(), vec![2.0, 3.0]);
        assert_eq!(series.highs(), vec![4.0, 5.0]);
        assert_eq!(series.lows(), vec![0.5, 1.5]);
    }

    #[test]
    fn test_slice_and_vec_agree() {
        let series = vec![bar(1, 1.0), bar(2, 2.0)];
        assert_eq!(series.closes(), series.as_slice().closes());
        assert!(series.validate().is_ok());
        assert!(series.as_slice().validate().is_ok());
    }

    #[test]
    fn test_inverted_bar_is_not_rejected() {
        // high < low is the caller's problem, not a validation failure
        let series = vec![OhlcvPoint::new(1, 5.0, 1.0, 9.0, 5.0, 0.0)];
        assert!(validate(&series).is_ok());
    }
}
