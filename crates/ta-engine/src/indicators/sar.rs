//! Parabolic SAR (Stop and Reverse).
//!
//! A trend-following indicator that trails price with an accelerating stop.
//! The computation is a single left-to-right pass over the highs and lows;
//! each step depends on the previous one and cannot be split up.
//!
//! # Algorithm
//!
//! 1. Initial direction from the first two highs: long if `high[1] > high[0]`.
//! 2. Seed `SAR[1]` with `low[0]` (long) or `high[0]` (short), and the
//!    extreme point (EP) with `high[1]` (long) or `low[1]` (short).
//! 3. For each later bar:
//!    - `candidate = SAR + AF * (EP - SAR)`
//!    - Long: clamp the candidate to at most `low[i-1]` and `low[i-2]`. If
//!      `low[i]` breaks below it the trend reverses, SAR becomes the prior EP,
//!      AF resets and EP becomes `low[i]`. Otherwise a new high moves EP and
//!      steps AF up to its maximum.
//!    - Short: mirror image with highs and lows swapped.
//!
//! # Absent values
//!
//! Index 0 is always absent. A one-bar series has no value at all.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::sar::{sar, SarParams};
//! use ta_engine::series::OhlcvPoint;
//!
//! let bars = [(10.0, 9.0), (11.0, 10.0), (12.0, 11.0), (13.0, 12.0)];
//! let series: Vec<OhlcvPoint> = bars
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &(h, l))| OhlcvPoint::new(i as i64, l, h, l, h, 0.0))
//!     .collect();
//!
//! let result = sar(&series, SarParams::default()).unwrap();
//! assert_eq!(result.value_at(0), None);
//! assert_eq!(result.value_at(1), Some(9.0)); // long: seeded from low[0]
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::IndicatorSeries;
use crate::series::{OhlcvPoint, OhlcvSeries};
use crate::traits::SeriesElement;

/// Returns the number of leading absent points of the Parabolic SAR.
#[inline]
#[must_use]
pub const fn sar_lookback() -> usize {
    1
}

/// Acceleration settings converted to the element type.
#[derive(Debug, Clone, Copy)]
struct Acceleration<T> {
    start: T,
    step: T,
    max: T,
}

/// Trend state carried from one bar to the next.
#[derive(Debug, Clone, Copy)]
struct SarState<T> {
    is_long: bool,
    af: T,
    extreme_point: T,
    sar: T,
}

impl<T: SeriesElement> SarState<T> {
    fn seed(high: &[T], low: &[T], accel: Acceleration<T>) -> Self {
        let is_long = high[1] > high[0];
        if is_long {
            Self {
                is_long,
                af: accel.start,
                extreme_point: high[1],
                sar: low[0],
            }
        } else {
            Self {
                is_long,
                af: accel.start,
                extreme_point: low[1],
                sar: high[0],
            }
        }
    }

    /// Advances to bar `i` (`i >= 2`) and returns the SAR for that bar.
    fn advance(&mut self, i: usize, high: &[T], low: &[T], accel: Acceleration<T>) -> T {
        let candidate = self.sar + self.af * (self.extreme_point - self.sar);

        if self.is_long {
            let clamped = candidate.min(low[i - 1]).min(low[i - 2]);
            if low[i] < clamped {
                self.reverse(low[i], accel);
            } else {
                self.sar = clamped;
                if high[i] > self.extreme_point {
                    self.extreme_point = high[i];
                    self.af = (self.af + accel.step).min(accel.max);
                }
            }
        } else {
            let clamped = candidate.max(high[i - 1]).max(high[i - 2]);
            if high[i] > clamped {
                self.reverse(high[i], accel);
            } else {
                self.sar = clamped;
                if low[i] < self.extreme_point {
                    self.extreme_point = low[i];
                    self.af = (self.af + accel.step).min(accel.max);
                }
            }
        }

        self.sar
    }

    fn reverse(&mut self, new_extreme: T, accel: Acceleration<T>) {
        self.is_long = !self.is_long;
        self.sar = self.extreme_point;
        self.extreme_point = new_extreme;
        self.af = accel.start;
    }
}

fn parabolic_sar<T: SeriesElement>(high: &[T], low: &[T], accel: Acceleration<T>) -> Vec<Option<T>> {
    let n = high.len().min(low.len());
    if n < 2 {
        return vec![None; n];
    }

    let seed = SarState::seed(high, low, accel);
    let trailing = (2..n).scan(seed, |state, i| Some(Some(state.advance(i, high, low, accel))));

    [None, Some(seed.sar)].into_iter().chain(trailing).collect()
}

/// Computes the Parabolic SAR from the highs and lows.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
#[must_use = "this returns a Result with the SAR series, which should be used"]
pub fn sar(series: &[OhlcvPoint], params: SarParams) -> Result<IndicatorSeries> {
    series.validate()?;
    let accel = Acceleration {
        start: params.af_start,
        step: params.af_step,
        max: params.af_max,
    };
    let values = parabolic_sar(&series.highs(), &series.lows(), accel);
    Ok(IndicatorSeries::from_values(&series.timestamps(), values))
}

/// Parabolic SAR configuration.
///
/// Defaults: `af_start` 0.02, `af_step` 0.02, `af_max` 0.2. The values are
/// used as given; no ordering between them is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SarParams {
    af_start: f64,
    af_step: f64,
    af_max: f64,
}

impl Default for SarParams {
    fn default() -> Self {
        Self {
            af_start: 0.02,
            af_step: 0.02,
            af_max: 0.2,
        }
    }
}

impl SarParams {
    /// Creates a configuration with the default acceleration settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial acceleration factor.
    #[must_use]
    pub const fn af_start(mut self, value: f64) -> Self {
        self.af_start = value;
        self
    }

    /// Sets the acceleration increment applied on each new extreme.
    #[must_use]
    pub const fn af_step(mut self, value: f64) -> Self {
        self.af_step = value;
        self
    }

    /// Sets the acceleration ceiling.
    #[must_use]
    pub const fn af_max(mut self, value: f64) -> Self {
        self.af_max = value;
        self
    }

    /// Returns the initial acceleration factor.
    #[must_use]
    pub const fn get_af_start(&self) -> f64 {
        self.af_start
    }

    /// Returns the acceleration increment.
    #[must_use]
    pub const fn get_af_step(&self) -> f64 {
        self.af_step
    }

    /// Returns the acceleration ceiling.
    #[must_use]
    pub const fn get_af_max(&self) -> f64 {
        self.af_max
    }

    /// Returns the lookback of the indicator.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        sar_lookback()
    }

    /// Computes the SAR using this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the series fails validation.
    pub fn compute(&self, series: &[OhlcvPoint]) -> Result<IndicatorSeries> {
        sar(series, *self)
    }
}
