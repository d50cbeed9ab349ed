//! Slow Stochastic Oscillator (%K and %D).
//!
//! # Algorithm
//!
//! 1. Raw %K over the trailing `k_period` highs and lows:
//!    `100 * (close - lowestLow) / (highestHigh - lowestLow)`, or `50` when the
//!    window is flat.
//! 2. Slow %K: partial-window mean of raw %K over `smooth_k`.
//! 3. %D: partial-window mean of slow %K over `d_period`.
//!
//! # Smoothing policy
//!
//! The smoothing steps use [`partial_window_mean`], not the strict
//! [`rolling_mean`](crate::kernels::window::rolling_mean) behind
//! [`sma`](crate::indicators::sma::sma). Once `smooth_k - 1` (or
//! `d_period - 1`) points have passed, a window holding only some present
//! inputs still averages those, so slow %K appears as soon as raw %K does
//! when `smooth_k <= k_period`. The strict SMA would wait for a full window
//! of present inputs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::IndicatorSeries;
use crate::kernels::rolling_extrema::PriceRange;
use crate::kernels::window::partial_window_mean;
use crate::series::{OhlcvPoint, OhlcvSeries};
use crate::traits::SeriesElement;

/// Returns the number of leading absent points of slow %K.
#[inline]
#[must_use]
pub const fn stochastic_k_lookback(k_period: usize, smooth_k: usize) -> usize {
    let raw = k_period.saturating_sub(1);
    let smooth = smooth_k.saturating_sub(1);
    if raw > smooth {
        raw
    } else {
        smooth
    }
}

/// Returns the number of leading absent points of %D.
///
/// ```
/// use ta_engine::indicators::stochastic::stochastic_lookback;
///
/// assert_eq!(stochastic_lookback(14, 3, 3), 13);
/// assert_eq!(stochastic_lookback(2, 5, 1), 4);
/// ```
#[inline]
#[must_use]
pub const fn stochastic_lookback(k_period: usize, d_period: usize, smooth_k: usize) -> usize {
    let k = stochastic_k_lookback(k_period, smooth_k);
    let d = d_period.saturating_sub(1);
    if k > d {
        k
    } else {
        d
    }
}

/// Raw (fast) %K values.
pub(crate) fn raw_k<T: SeriesElement>(high: &[T], low: &[T], close: &[T], k_period: usize) -> Vec<Option<T>> {
    let range = PriceRange::compute(high, low, k_period);
    close
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            range.at(i).map(|(highest, lowest)| {
                if highest == lowest {
                    T::fifty()
                } else {
                    T::hundred() * (c - lowest) / (highest - lowest)
                }
            })
        })
        .collect()
}

/// The two lines of the slow stochastic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StochasticOutput {
    /// Slow %K.
    pub percent_k: IndicatorSeries,
    /// %D, the smoothed slow %K.
    pub percent_d: IndicatorSeries,
}

/// Computes the slow Stochastic Oscillator.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::stochastic::{stochastic, StochasticParams};
/// use ta_engine::series::OhlcvPoint;
///
/// let series: Vec<OhlcvPoint> = (0..30)
///     .map(|i| {
///         let c = 100.0 + f64::from(i % 7);
///         OhlcvPoint::new(i64::from(i), c, c + 1.0, c - 1.0, c, 10.0)
///     })
///     .collect();
///
/// let out = stochastic(&series, StochasticParams::default()).unwrap();
/// assert_eq!(out.percent_k.len(), 30);
/// assert_eq!(out.percent_d.absent_prefix_len(), 13);
/// ```
#[must_use = "this returns a Result with the stochastic lines, which should be used"]
pub fn stochastic(series: &[OhlcvPoint], params: StochasticParams) -> Result<StochasticOutput> {
    series.validate()?;

    let raw = raw_k(&series.highs(), &series.lows(), &series.closes(), params.k_period);
    let slow_k = partial_window_mean(&raw, params.smooth_k);
    let percent_d = partial_window_mean(&slow_k, params.d_period);

    let timestamps = series.timestamps();
    Ok(StochasticOutput {
        percent_k: IndicatorSeries::from_values(&timestamps, slow_k),
        percent_d: IndicatorSeries::from_values(&timestamps, percent_d),
    })
}

/// Stochastic configuration.
///
/// Defaults: `k_period` 14, `d_period` 3, `smooth_k` 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StochasticParams {
    k_period: usize,
    d_period: usize,
    smooth_k: usize,
}

impl Default for StochasticParams {
    fn default() -> Self {
        Self {
            k_period: 14,
            d_period: 3,
            smooth_k: 3,
        }
    }
}

impl StochasticParams {
    /// Creates a configuration with the default periods.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the high/low window of raw %K.
    #[must_use]
    pub const fn k_period(mut self, period: usize) -> Self {
        self.k_period = period;
        self
    }

    /// Sets the %D smoothing window.
    #[must_use]
    pub const fn d_period(mut self, period: usize) -> Self {
        self.d_period = period;
        self
    }

    /// Sets the slow %K smoothing window.
    #[must_use]
    pub const fn smooth_k(mut self, period: usize) -> Self {
        self.smooth_k = period;
        self
    }

    /// Returns the high/low window of raw %K.
    #[must_use]
    pub const fn get_k_period(&self) -> usize {
        self.k_period
    }

    /// Returns the %D smoothing window.
    #[must_use]
    pub const fn get_d_period(&self) -> usize {
        self.d_period
    }

    /// Returns the slow %K smoothing window.
    #[must_use]
    pub const fn get_smooth_k(&self) -> usize {
        self.smooth_k
    }

    /// Returns the %D lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        stochastic_lookback(self.k_period, self.d_period, self.smooth_k)
    }

    /// Computes the oscillator using this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the series fails validation.
    pub fn compute(&self, series: &[OhlcvPoint]) -> Result<StochasticOutput> {
        stochastic(series, *self)
    }
}
