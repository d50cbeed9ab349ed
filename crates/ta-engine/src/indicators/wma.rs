//! Weighted Moving Average (WMA) indicator.
//!
//! Linearly decreasing weights: the newest close gets weight `period`, the
//! oldest in the window weight 1.
//!
//! ```text
//! WMA[i] = (period×close[i] + (period-1)×close[i-1] + ... + 1×close[i-period+1])
//!          / (period × (period+1) / 2)
//! ```
//!
//! Warm-up and degenerate periods behave exactly as for the
//! [SMA](crate::indicators::sma).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::IndicatorSeries;
use crate::kernels::window::weighted_mean;
use crate::series::{OhlcvPoint, OhlcvSeries};

/// Returns the number of leading absent points for a WMA of `period`.
#[inline]
#[must_use]
pub const fn wma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the Weighted Moving Average of the closes.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::wma::{wma, WmaParams};
/// use ta_engine::series::OhlcvPoint;
///
/// let series: Vec<OhlcvPoint> = [10.0, 11.0, 12.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &c)| OhlcvPoint::new(i as i64, c, c, c, c, 0.0))
///     .collect();
///
/// let result = wma(&series, WmaParams::new().period(3)).unwrap();
/// // (10×1 + 11×2 + 12×3) / 6
/// assert!((result.value_at(2).unwrap() - 68.0 / 6.0).abs() < 1e-10);
/// ```
#[must_use = "this returns a Result with the WMA series, which should be used"]
pub fn wma(series: &[OhlcvPoint], params: WmaParams) -> Result<IndicatorSeries> {
    series.validate()?;
    let values = weighted_mean(&series.closes(), params.period);
    Ok(IndicatorSeries::from_values(&series.timestamps(), values))
}

/// WMA configuration. Default period is 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WmaParams {
    period: usize,
}

impl Default for WmaParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl WmaParams {
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
        wma_lookback(self.period)
    }

    /// Computes the WMA using this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the series fails validation.
    pub fn compute(&self, series: &[OhlcvPoint]) -> Result<IndicatorSeries> {
        wma(series, *self)
    }
}
