//! Rate of Change (ROC).
//!
//! `ROC[i] = 100 * (close[i] - close[i-period]) / close[i-period]` for
//! `i >= period`. A zero reference close leaves the point absent instead of
//! producing an infinity. `period == 0` gives an all-absent output.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::IndicatorSeries;
use crate::series::{OhlcvPoint, OhlcvSeries};
use crate::traits::SeriesElement;

/// Returns the number of leading absent points for a ROC of `period`.
#[inline]
#[must_use]
pub const fn roc_lookback(period: usize) -> usize {
    period
}

fn roc_values<T: SeriesElement>(closes: &[T], period: usize) -> Vec<Option<T>> {
    let n = closes.len();
    if period == 0 || period >= n {
        return vec![None; n];
    }

    let changes = closes.iter().zip(&closes[period..]).map(|(&prev, &curr)| {
        if prev == T::zero() {
            None
        } else {
            Some(T::hundred() * (curr - prev) / prev)
        }
    });

    std::iter::repeat(None).take(period).chain(changes).collect()
}

/// Computes the Rate of Change of the closes, in percent.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::roc::{roc, RocParams};
/// use ta_engine::series::OhlcvPoint;
///
/// let series: Vec<OhlcvPoint> = [100.0, 0.0, 110.0, 5.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &c)| OhlcvPoint::new(i as i64, c, c, c, c, 0.0))
///     .collect();
///
/// let result = roc(&series, RocParams::new().period(2)).unwrap();
/// assert_eq!(result.value_at(2), Some(10.0));
/// // the reference close two bars back is zero
/// assert_eq!(result.value_at(3), None);
/// ```
#[must_use = "this returns a Result with the ROC series, which should be used"]
pub fn roc(series: &[OhlcvPoint], params: RocParams) -> Result<IndicatorSeries> {
    series.validate()?;
    let values = roc_values(&series.closes(), params.period);
    Ok(IndicatorSeries::from_values(&series.timestamps(), values))
}

/// ROC configuration. Default period is 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RocParams {
    period: usize,
}

impl Default for RocParams {
    fn default() -> Self {
        Self { period: 12 }
    }
}

impl RocParams {
    /// Creates a configuration with the default period.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many bars back the reference close is taken.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the reference distance in bars.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        roc_lookback(self.period)
    }

    /// Computes the ROC using this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the series fails validation.
    pub fn compute(&self, series: &[OhlcvPoint]) -> Result<IndicatorSeries> {
        roc(series, *self)
    }
}
