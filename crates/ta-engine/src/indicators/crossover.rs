//! Golden and death cross detection between two indicator lines.
//!
//! With `diff[i] = fast[i] - slow[i]`:
//!
//! - a **golden** cross at `i` when `diff[i-1] < 0` and `diff[i] > 0`
//! - a **death** cross at `i` when `diff[i-1] > 0` and `diff[i] < 0`
//!
//! Both comparisons are strict: touching lines (`diff == 0`) never cross, and
//! an absent value on either side of the step suppresses the signal. Points
//! whose timestamps disagree between the two lines are treated as absent.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::{IndicatorPoint, IndicatorSeries};
use crate::indicators::ema::{ema, EmaParams};
use crate::indicators::sma::{sma, SmaParams};
use crate::series::OhlcvPoint;

/// Direction of a crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CrossKind {
    /// The fast line moved above the slow line.
    Golden,
    /// The fast line moved below the slow line.
    Death,
}

/// A single crossing of two aligned lines.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Crossover {
    /// Timestamp of the bar on which the cross completed.
    pub timestamp: i64,
    /// Index of that bar in the input series.
    pub index: usize,
    /// Golden or death.
    pub kind: CrossKind,
    /// Fast line value at the cross.
    pub fast: f64,
    /// Slow line value at the cross.
    pub slow: f64,
    /// Close of the bar at the cross, when the lines came from a bar series.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub close: Option<f64>,
}

#[inline]
fn difference(fast: &IndicatorPoint, slow: &IndicatorPoint) -> Option<f64> {
    if fast.timestamp != slow.timestamp {
        return None;
    }
    Some(fast.value? - slow.value?)
}

/// Finds every strict crossing of `fast` over or under `slow`.
///
/// Only the common prefix of the two series is scanned.
///
/// # Example
///
/// ```
/// use ta_engine::indicator_series::IndicatorSeries;
/// use ta_engine::indicators::crossover::{crossovers, CrossKind};
///
/// let ts = [1, 2, 3, 4];
/// let fast = IndicatorSeries::from_values(&ts, vec![Some(1.0), Some(3.0), Some(2.0), Some(0.5)]);
/// let slow = IndicatorSeries::from_values(&ts, vec![Some(2.0), Some(2.0), Some(2.0), Some(2.0)]);
///
/// let found = crossovers(&fast, &slow);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].kind, CrossKind::Golden);
/// assert_eq!(found[0].timestamp, 2);
/// ```
#[must_use]
pub fn crossovers(fast: &IndicatorSeries, slow: &IndicatorSeries) -> Vec<Crossover> {
    let pairs: Vec<(&IndicatorPoint, &IndicatorPoint)> = fast.iter().zip(slow.iter()).collect();

    pairs
        .windows(2)
        .enumerate()
        .filter_map(|(offset, window)| {
            let (prev_fast, prev_slow) = window[0];
            let (curr_fast, curr_slow) = window[1];
            let before = difference(prev_fast, prev_slow)?;
            let after = difference(curr_fast, curr_slow)?;

            let kind = if before < 0.0 && after > 0.0 {
                CrossKind::Golden
            } else if before > 0.0 && after < 0.0 {
                CrossKind::Death
            } else {
                return None;
            };

            Some(Crossover {
                timestamp: curr_fast.timestamp,
                index: offset + 1,
                kind,
                fast: curr_fast.value?,
                slow: curr_slow.value?,
                close: None,
            })
        })
        .collect()
}

/// Fills in the close of the bar each cross completed on.
fn with_closes(found: Vec<Crossover>, series: &[OhlcvPoint]) -> Vec<Crossover> {
    found
        .into_iter()
        .map(|cross| Crossover {
            close: series.get(cross.index).map(|bar| bar.close),
            ..cross
        })
        .collect()
}

/// Crossings of a short-period SMA over a long-period SMA of the closes.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
#[must_use = "this returns a Result with the SMA crossovers, which should be used"]
pub fn sma_crossovers(series: &[OhlcvPoint], short_period: usize, long_period: usize) -> Result<Vec<Crossover>> {
    let short = sma(series, SmaParams::new().period(short_period))?;
    let long = sma(series, SmaParams::new().period(long_period))?;
    Ok(with_closes(crossovers(&short, &long), series))
}

/// Crossings of a short-period EMA over a long-period EMA of the closes.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
#[must_use = "this returns a Result with the EMA crossovers, which should be used"]
pub fn ema_crossovers(series: &[OhlcvPoint], short_period: usize, long_period: usize) -> Result<Vec<Crossover>> {
    let short = ema(series, EmaParams::new().period(short_period))?;
    let long = ema(series, EmaParams::new().period(long_period))?;
    Ok(with_closes(crossovers(&short, &long), series))
}
