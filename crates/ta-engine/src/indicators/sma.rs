//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the arithmetic mean of the last `period` closes.
//!
//! # Formula
//!
//! ```text
//! SMA[i] = (close[i] + close[i-1] + ... + close[i-period+1]) / period
//! ```
//!
//! # Absent values
//!
//! The first `period - 1` points are absent. A zero period, or one longer
//! than the series, produces an all-absent output; callers should check for
//! that instead of expecting an error.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::sma::{sma, SmaParams};
//! use ta_engine::series::OhlcvPoint;
//!
//! let series: Vec<OhlcvPoint> = [1.0, 2.0, 3.0, 4.0, 5.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &c)| OhlcvPoint::new(i as i64, c, c, c, c, 0.0))
//!     .collect();
//!
//! let result = sma(&series, SmaParams::new().period(3)).unwrap();
//! assert_eq!(result.values(), vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::IndicatorSeries;
use crate::kernels::window::rolling_mean;
use crate::series::{OhlcvPoint, OhlcvSeries};

/// Returns the number of leading absent points for an SMA of `period`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(20), 19);
/// assert_eq!(sma_lookback(1), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the Simple Moving Average of the closes.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
#[must_use = "this returns a Result with the SMA series, which should be used"]
pub fn sma(series: &[OhlcvPoint], params: SmaParams) -> Result<IndicatorSeries> {
    series.validate()?;
    let values = rolling_mean(&series.closes(), params.period);
    Ok(IndicatorSeries::from_values(&series.timestamps(), values))
}

/// SMA configuration.
///
/// Default period is 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmaParams {
    period: usize,
}

impl Default for SmaParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl SmaParams {
    /// Creates a configuration with the default period.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the averaging period.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the averaging period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        sma_lookback(self.period)
    }

    /// Computes the SMA using this configuration. See [`sma`].
    ///
    /// # Errors
    ///
    /// Returns an error if the series fails validation.
    pub fn compute(&self, series: &[OhlcvPoint]) -> Result<IndicatorSeries> {
        sma(series, *self)
    }
}
