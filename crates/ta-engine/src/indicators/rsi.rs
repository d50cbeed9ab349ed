//! Relative Strength Index (RSI) with Wilder's smoothing.
//!
//! # Algorithm
//!
//! 1. Close-to-close changes `d[j] = close[j] - close[j-1]` for `j >= 1`,
//!    split into gains `max(d, 0)` and losses `max(-d, 0)`.
//! 2. Seed: `avg_gain` and `avg_loss` are the simple means of
//!    `d[1..=period]`; the first RSI value sits at index `period`.
//! 3. After the seed, Wilder's recurrence with factor `1/period`:
//!    `avg = (avg * (period - 1) + x) / period`.
//!
//! # Value policy
//!
//! Checked in this order, so a flat series reads 100:
//!
//! - `avg_loss == 0` → 100
//! - `avg_gain == 0` → 0
//! - otherwise `100 - 100 / (1 + avg_gain / avg_loss)`
//!
//! None of these cases is an error.
//!
//! # Absent values
//!
//! Indices `< period` are absent. With `period == 0` or a series of at most
//! `period` bars the whole output is absent.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::IndicatorSeries;
use crate::kernels::smoothing::wilder_step;
use crate::series::{OhlcvPoint, OhlcvSeries};
use crate::traits::SeriesElement;

/// Returns the number of leading absent points for an RSI of `period`.
///
/// ```
/// use ta_engine::indicators::rsi::rsi_lookback;
///
/// assert_eq!(rsi_lookback(14), 14);
/// ```
#[inline]
#[must_use]
pub const fn rsi_lookback(period: usize) -> usize {
    period
}

/// Running Wilder averages of gains and losses.
#[derive(Debug, Clone, Copy)]
struct WilderState<T> {
    avg_gain: T,
    avg_loss: T,
}

impl<T: SeriesElement> WilderState<T> {
    fn seed(changes: &[T]) -> Self {
        let (gain_sum, loss_sum) = changes
            .iter()
            .fold((T::zero(), T::zero()), |(g, l), &d| (g + gain(d), l + loss(d)));
        let period_t = T::from_usize(changes.len());
        Self {
            avg_gain: gain_sum / period_t,
            avg_loss: loss_sum / period_t,
        }
    }

    fn step(self, change: T, period: usize) -> Self {
        Self {
            avg_gain: wilder_step(self.avg_gain, gain(change), period),
            avg_loss: wilder_step(self.avg_loss, loss(change), period),
        }
    }

    fn rsi(self) -> T {
        if self.avg_loss == T::zero() {
            T::hundred()
        } else if self.avg_gain == T::zero() {
            T::zero()
        } else {
            T::hundred() - T::hundred() / (T::one() + self.avg_gain / self.avg_loss)
        }
    }
}

#[inline]
fn gain<T: SeriesElement>(change: T) -> T {
    if change > T::zero() {
        change
    } else {
        T::zero()
    }
}

#[inline]
fn loss<T: SeriesElement>(change: T) -> T {
    if change < T::zero() {
        -change
    } else {
        T::zero()
    }
}

/// Wilder RSI over a plain slice of closes.
fn wilder_rsi<T: SeriesElement>(closes: &[T], period: usize) -> Vec<Option<T>> {
    let n = closes.len();
    if period == 0 || n <= period {
        return vec![None; n];
    }

    // changes[k] is the close-to-close change ending at index k + 1
    let changes: Vec<T> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let seed = WilderState::seed(&changes[..period]);

    let warmup = std::iter::repeat(None).take(period);
    let values = std::iter::once(Some(seed.rsi())).chain(changes[period..].iter().scan(
        seed,
        move |state, &change| {
            *state = state.step(change, period);
            Some(Some(state.rsi()))
        },
    ));

    warmup.chain(values).collect()
}

/// Computes the Relative Strength Index of the closes.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::rsi::{rsi, RsiParams};
/// use ta_engine::series::OhlcvPoint;
///
/// // a steadily rising market has no losses at all
/// let series: Vec<OhlcvPoint> = (0..30)
///     .map(|i| {
///         let c = 100.0 + f64::from(i);
///         OhlcvPoint::new(i64::from(i), c, c, c, c, 0.0)
///     })
///     .collect();
///
/// let result = rsi(&series, RsiParams::default()).unwrap();
/// assert_eq!(result.absent_prefix_len(), 14);
/// assert!(result.iter().skip(14).all(|p| p.value == Some(100.0)));
/// ```
#[must_use = "this returns a Result with the RSI series, which should be used"]
pub fn rsi(series: &[OhlcvPoint], params: RsiParams) -> Result<IndicatorSeries> {
    series.validate()?;
    let values = wilder_rsi(&series.closes(), params.period);
    Ok(IndicatorSeries::from_values(&series.timestamps(), values))
}

/// RSI configuration. Default period is 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RsiParams {
    period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl RsiParams {
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
        rsi_lookback(self.period)
    }

    /// Computes the RSI using this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the series fails validation.
    pub fn compute(&self, series: &[OhlcvPoint]) -> Result<IndicatorSeries> {
        rsi(series, *self)
    }
}
