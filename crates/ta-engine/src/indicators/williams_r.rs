//! Williams %R.
//!
//! ```text
//! %R[i] = -100 * (highestHigh - close[i]) / (highestHigh - lowestLow)
//! ```
//!
//! over the trailing `period` highs and lows, giving values in `[-100, 0]`.
//! A flat window (`highestHigh == lowestLow`) reads `-50`.
//!
//! The first `period - 1` points are absent; a zero or oversized period
//! leaves the whole output absent.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::IndicatorSeries;
use crate::kernels::rolling_extrema::PriceRange;
use crate::series::{OhlcvPoint, OhlcvSeries};
use crate::traits::SeriesElement;

/// Returns the number of leading absent points for a Williams %R of `period`.
#[inline]
#[must_use]
pub const fn williams_r_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

fn williams_r_values<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Vec<Option<T>> {
    let range = PriceRange::compute(high, low, period);
    close
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            range.at(i).map(|(highest, lowest)| {
                if highest == lowest {
                    -T::fifty()
                } else {
                    -T::hundred() * (highest - c) / (highest - lowest)
                }
            })
        })
        .collect()
}

/// Computes Williams %R.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
#[must_use = "this returns a Result with the Williams %R series, which should be used"]
pub fn williams_r(series: &[OhlcvPoint], params: WilliamsRParams) -> Result<IndicatorSeries> {
    series.validate()?;
    let values = williams_r_values(&series.highs(), &series.lows(), &series.closes(), params.period);
    Ok(IndicatorSeries::from_values(&series.timestamps(), values))
}

/// Williams %R configuration. Default period is 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WilliamsRParams {
    period: usize,
}

impl Default for WilliamsRParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl WilliamsRParams {
    /// Creates a configuration with the default period.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookback window.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the lookback window.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        williams_r_lookback(self.period)
    }

    /// Computes Williams %R using this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the series fails validation.
    pub fn compute(&self, series: &[OhlcvPoint]) -> Result<IndicatorSeries> {
        williams_r(series, *self)
    }
}
