//! Price/indicator divergence over a trailing window.
//!
//! At bar `i`, with the `lookback` bars before it as the window:
//!
//! - **bullish** when `close[i]` is below every close in the window while the
//!   indicator at `i` stays above the window's lowest indicator value
//! - **bearish** when `close[i]` is above every close in the window while the
//!   indicator at `i` stays below the window's highest indicator value
//!
//! An absent indicator value at `i` or anywhere in the window produces no
//! signal, as does a bar whose timestamp disagrees with the indicator point.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::indicator_series::IndicatorSeries;
use crate::series::OhlcvPoint;

/// Window length used by [`MacdOutput::divergences`](crate::indicators::macd::MacdOutput::divergences)
/// callers that have no preference.
pub const DEFAULT_DIVERGENCE_LOOKBACK: usize = 20;

/// Direction of a divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DivergenceKind {
    /// New price low without a new indicator low.
    Bullish,
    /// New price high without a new indicator high.
    Bearish,
}

/// A single divergence event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Divergence {
    /// Timestamp of the bar that made the new extreme.
    pub timestamp: i64,
    /// Index of that bar in the input series.
    pub index: usize,
    /// Bullish or bearish.
    pub kind: DivergenceKind,
    /// Close of the bar.
    pub close: f64,
    /// Indicator value at the bar.
    pub indicator: f64,
}

/// Lowest and highest of `values`, or `None` if any value is absent.
fn extremes(mut values: impl Iterator<Item = Option<f64>>) -> Option<(f64, f64)> {
    values.try_fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), value| {
        value.map(|v| (low.min(v), high.max(v)))
    })
}

fn aligned_value(series: &[OhlcvPoint], line: &IndicatorSeries, index: usize) -> Option<f64> {
    let point = line.get(index)?;
    if point.timestamp != series.get(index)?.timestamp {
        return None;
    }
    point.value
}

fn divergence_at(series: &[OhlcvPoint], line: &IndicatorSeries, index: usize, lookback: usize) -> Option<Divergence> {
    let start = index - lookback;
    let indicator = aligned_value(series, line, index)?;
    let (line_low, line_high) = extremes((start..index).map(|j| aligned_value(series, line, j)))?;
    let (close_low, close_high) = extremes(series[start..index].iter().map(|bar| Some(bar.close)))?;

    let bar = &series[index];
    let kind = if bar.close < close_low && indicator > line_low {
        DivergenceKind::Bullish
    } else if bar.close > close_high && indicator < line_high {
        DivergenceKind::Bearish
    } else {
        return None;
    };

    Some(Divergence {
        timestamp: bar.timestamp,
        index,
        kind,
        close: bar.close,
        indicator,
    })
}

/// Finds every divergence between the closes of `series` and `line`.
///
/// Only the common prefix of the two is scanned. A `lookback` of zero, or one
/// not shorter than the series, yields no events.
///
/// # Example
///
/// ```
/// use ta_engine::indicator_series::IndicatorSeries;
/// use ta_engine::indicators::divergence::{divergences, DivergenceKind};
/// use ta_engine::series::OhlcvPoint;
///
/// let series: Vec<OhlcvPoint> = [5.0, 4.0, 6.0, 3.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &c)| OhlcvPoint::new(i as i64, c, c, c, c, 0.0))
///     .collect();
/// let line = IndicatorSeries::from_values(&[0, 1, 2, 3], vec![Some(-2.0), Some(-3.0), Some(-1.0), Some(-2.5)]);
///
/// let found = divergences(&series, &line, 3);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].kind, DivergenceKind::Bullish);
/// assert_eq!(found[0].index, 3);
/// ```
#[must_use]
pub fn divergences(series: &[OhlcvPoint], line: &IndicatorSeries, lookback: usize) -> Vec<Divergence> {
    if lookback == 0 {
        return Vec::new();
    }
    let n = series.len().min(line.len());
    (lookback..n)
        .filter_map(|index| divergence_at(series, line, index, lookback))
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::test_util::{closes_series, STEP_MS};

    fn line(values: &[Option<f64>]) -> IndicatorSeries {
        let ts: Vec<i64> = (0..values.len() as i64).map(|i| i * STEP_MS).collect();
        IndicatorSeries::from_values(&ts, values.to_vec())
    }

    #[test]
    fn test_bullish_divergence() {
        let series = closes_series(&[5.0, 4.0, 6.0, 3.0]);
        let found = divergences(&series, &line(&[Some(-2.0), Some(-3.0), Some(-1.0), Some(-2.5)]), 3);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DivergenceKind::Bullish);
        assert_eq!(found[0].index, 3);
        assert_eq!(found[0].timestamp, 3 * STEP_MS);
        assert_eq!(found[0].close, 3.0);
        assert_eq!(found[0].indicator, -2.5);
    }

    #[test]
    fn test_bearish_divergence() {
        let series = closes_series(&[5.0, 6.0, 4.0, 7.0]);
        let found = divergences(&series, &line(&[Some(2.0), Some(3.0), Some(1.0), Some(2.5)]), 3);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DivergenceKind::Bearish);
        assert_eq!(found[0].index, 3);
    }

    #[test]
    fn test_confirmed_extreme_is_not_a_divergence() {
        // the indicator makes the new low together with price
        let series = closes_series(&[5.0, 4.0, 6.0, 3.0]);
        assert!(divergences(&series, &line(&[Some(-2.0), Some(-3.0), Some(-1.0), Some(-4.0)]), 3).is_empty());
    }

    #[test]
    fn test_no_new_price_extreme_is_not_a_divergence() {
        let series = closes_series(&[5.0, 4.0, 6.0, 4.5]);
        assert!(divergences(&series, &line(&[Some(-2.0), Some(-3.0), Some(-1.0), Some(-2.5)]), 3).is_empty());
    }

    #[test]
    fn test_absent_value_in_window_suppresses_signal() {
        let series = closes_series(&[5.0, 4.0, 6.0, 3.0]);
        assert!(divergences(&series, &line(&[Some(-2.0), None, Some(-1.0), Some(-2.5)]), 3).is_empty());
        assert!(divergences(&series, &line(&[Some(-2.0), Some(-3.0), Some(-1.0), None]), 3).is_empty());
    }

    #[test]
    fn test_mismatched_timestamps_suppress_signal() {
        let series = closes_series(&[5.0, 4.0, 6.0, 3.0]);
        let shifted = IndicatorSeries::from_values(&[0, 1, 2, 3], vec![Some(-2.0), Some(-3.0), Some(-1.0), Some(-2.5)]);
        assert!(divergences(&series, &shifted, 3).is_empty());
    }

    #[test]
    fn test_degenerate_lookbacks() {
        let series = closes_series(&[5.0, 4.0, 6.0, 3.0]);
        let values = line(&[Some(-2.0), Some(-3.0), Some(-1.0), Some(-2.5)]);
        assert!(divergences(&series, &values, 0).is_empty());
        assert!(divergences(&series, &values, 4).is_empty());
        assert!(divergences(&series, &values, usize::MAX).is_empty());
    }
}
