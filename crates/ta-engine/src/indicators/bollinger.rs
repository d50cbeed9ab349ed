//! Bollinger Bands.
//!
//! # Formula
//!
//! ```text
//! middle[i] = SMA(close, period)[i]
//! stddev[i] = sqrt(sum((close[j] - middle[i])^2 for j in window) / period)
//! upper[i]  = middle[i] + multiplier * stddev[i]
//! lower[i]  = middle[i] - multiplier * stddev[i]
//! ```
//!
//! The deviation is the *population* standard deviation (divide by `period`).
//! The middle band is produced by the same kernel as
//! [`sma`](crate::indicators::sma::sma), so the two agree bit for bit.
//!
//! # Bandwidth
//!
//! [`BollingerOutput::bandwidth`] reports `(upper - lower) / middle`, a common
//! volatility-squeeze measure. It is absent where `middle` is zero.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::bollinger::{bollinger, BollingerParams};
//! use ta_engine::series::OhlcvPoint;
//!
//! let series: Vec<OhlcvPoint> = (0..40)
//!     .map(|i| {
//!         let c = 100.0 + (f64::from(i) * 0.5).sin() * 4.0;
//!         OhlcvPoint::new(i64::from(i) * 60_000, c, c, c, c, 0.0)
//!     })
//!     .collect();
//!
//! let bands = bollinger(&series, BollingerParams::default()).unwrap();
//! assert_eq!(bands.middle.absent_prefix_len(), 19);
//!
//! for i in 19..40 {
//!     let upper = bands.upper.value_at(i).unwrap();
//!     let middle = bands.middle.value_at(i).unwrap();
//!     let lower = bands.lower.value_at(i).unwrap();
//!     assert!(lower <= middle && middle <= upper);
//! }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::IndicatorSeries;
use crate::kernels::window::{rolling_mean, rolling_population_stddev};
use crate::series::{OhlcvPoint, OhlcvSeries};
use crate::traits::SeriesElement;

/// Returns the number of leading absent points for bands of `period`.
#[inline]
#[must_use]
pub const fn bollinger_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Upper, middle and lower band values as parallel vectors.
struct Bands<T> {
    upper: Vec<Option<T>>,
    middle: Vec<Option<T>>,
    lower: Vec<Option<T>>,
}

fn bands<T: SeriesElement>(closes: &[T], period: usize, multiplier: T) -> Bands<T> {
    let middle = rolling_mean(closes, period);
    let stddev = rolling_population_stddev(closes, &middle, period);

    let (upper, lower): (Vec<_>, Vec<_>) = middle
        .iter()
        .zip(&stddev)
        .map(|(m, s)| match (*m, *s) {
            (Some(m), Some(s)) => (Some(m + multiplier * s), Some(m - multiplier * s)),
            _ => (None, None),
        })
        .unzip();

    Bands { upper, middle, lower }
}

/// The three Bollinger bands, each aligned with the input series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BollingerOutput {
    /// `middle + multiplier * stddev`.
    pub upper: IndicatorSeries,
    /// Simple moving average of the closes.
    pub middle: IndicatorSeries,
    /// `middle - multiplier * stddev`.
    pub lower: IndicatorSeries,
}

impl BollingerOutput {
    /// Relative band width `(upper - lower) / middle`.
    ///
    /// Absent wherever a band is absent or the middle band is zero.
    #[must_use]
    pub fn bandwidth(&self) -> IndicatorSeries {
        let values = self
            .upper
            .iter()
            .zip(self.middle.iter())
            .zip(self.lower.iter())
            .map(|((u, m), l)| match (u.value, m.value, l.value) {
                (Some(u), Some(m), Some(l)) if m != 0.0 => Some((u - l) / m),
                _ => None,
            })
            .collect();
        IndicatorSeries::from_values(&self.middle.timestamps(), values)
    }
}

/// Computes Bollinger Bands over the closes.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
#[must_use = "this returns a Result with the Bollinger bands, which should be used"]
pub fn bollinger(series: &[OhlcvPoint], params: BollingerParams) -> Result<BollingerOutput> {
    series.validate()?;

    let Bands { upper, middle, lower } = bands(&series.closes(), params.period, params.multiplier);
    let timestamps = series.timestamps();
    Ok(BollingerOutput {
        upper: IndicatorSeries::from_values(&timestamps, upper),
        middle: IndicatorSeries::from_values(&timestamps, middle),
        lower: IndicatorSeries::from_values(&timestamps, lower),
    })
}

/// Bollinger Bands configuration.
///
/// Defaults: period 20, multiplier 2.0.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::bollinger::BollingerParams;
///
/// let params = BollingerParams::new().period(10).multiplier(2.5);
/// assert_eq!(params.get_period(), 10);
/// assert_eq!(params.get_multiplier(), 2.5);
/// assert_eq!(params.lookback(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BollingerParams {
    period: usize,
    multiplier: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            multiplier: 2.0,
        }
    }
}

impl BollingerParams {
    /// Creates a configuration with the default period and multiplier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the averaging window.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the standard deviation multiplier.
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Returns the averaging window.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the standard deviation multiplier.
    #[must_use]
    pub const fn get_multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        bollinger_lookback(self.period)
    }

    /// Computes the bands using this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the series fails validation.
    pub fn compute(&self, series: &[OhlcvPoint]) -> Result<BollingerOutput> {
        bollinger(series, *self)
    }
}
