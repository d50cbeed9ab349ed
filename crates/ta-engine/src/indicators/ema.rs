//! Exponential Moving Average (EMA) indicator.
//!
//! # Formula
//!
//! ```text
//! alpha   = 2 / (period + 1)
//! EMA[p-1] = mean(close[0..p])                      (seed)
//! EMA[i]   = (close[i] - EMA[i-1]) * alpha + EMA[i-1]    for i >= p
//! ```
//!
//! The seed is the simple average of the first `period` closes, so the first
//! value appears at index `period - 1` and agrees with the SMA there. The
//! recurrence never restarts: if a previous value is absent the output stays
//! absent.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::ema::{ema, EmaParams};
//! use ta_engine::series::OhlcvPoint;
//!
//! let series: Vec<OhlcvPoint> = [1.0, 2.0, 3.0, 4.0, 5.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &c)| OhlcvPoint::new(i as i64, c, c, c, c, 0.0))
//!     .collect();
//!
//! let result = ema(&series, EmaParams::new().period(3)).unwrap();
//! assert_eq!(result.values(), vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::IndicatorSeries;
use crate::kernels::smoothing::ema_seeded;
use crate::series::{OhlcvPoint, OhlcvSeries};

/// Returns the number of leading absent points for an EMA of `period`.
#[inline]
#[must_use]
pub const fn ema_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the Exponential Moving Average of the closes.
///
/// A zero period or one longer than the series yields an all-absent output.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
#[must_use = "this returns a Result with the EMA series, which should be used"]
pub fn ema(series: &[OhlcvPoint], params: EmaParams) -> Result<IndicatorSeries> {
    series.validate()?;
    let values = ema_seeded(&series.closes(), params.period);
    Ok(IndicatorSeries::from_values(&series.timestamps(), values))
}

/// EMA configuration.
///
/// Default period is 20.
///
/// ```
/// use ta_engine::indicators::ema::EmaParams;
///
/// let params = EmaParams::new().period(12);
/// assert_eq!(params.get_period(), 12);
/// assert_eq!(params.lookback(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmaParams {
    period: usize,
}

impl Default for EmaParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl EmaParams {
    /// Creates a configuration with the default period.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the smoothing period.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the smoothing period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        ema_lookback(self.period)
    }

    /// Computes the EMA using this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the series fails validation.
    pub fn compute(&self, series: &[OhlcvPoint]) -> Result<IndicatorSeries> {
        ema(series, *self)
    }
}
