//! Moving Average Convergence Divergence (MACD).
//!
//! # Components
//!
//! - **MACD line**: `EMA(fast)[i] - EMA(slow)[i]`, absent if either EMA is.
//! - **Signal line**: EMA of the MACD line over `signal_period`.
//! - **Histogram**: `macd[i] - signal[i]`, absent if either is.
//!
//! # Signal line over gaps
//!
//! An EMA cannot run over a sequence with holes, so the signal is computed on
//! the *compacted* MACD line (present values only, in order) and mapped back
//! onto the input timestamps. Timestamps with no signal value stay absent.
//!
//! # Lookback
//!
//! With `fast <= slow`, the MACD line starts at `slow - 1` and the signal line
//! and histogram at `slow + signal - 2`. `fast > slow` is accepted and simply
//! swaps which EMA dictates the warm-up.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::macd::{macd, MacdParams};
//! use ta_engine::series::OhlcvPoint;
//!
//! let series: Vec<OhlcvPoint> = (0..60)
//!     .map(|i| {
//!         let c = 100.0 + (f64::from(i) * 0.2).sin() * 5.0;
//!         OhlcvPoint::new(i64::from(i) * 60_000, c, c, c, c, 0.0)
//!     })
//!     .collect();
//!
//! let out = macd(&series, MacdParams::default()).unwrap();
//! assert_eq!(out.macd_line.absent_prefix_len(), 25);
//! assert_eq!(out.signal_line.absent_prefix_len(), 33);
//! assert_eq!(out.histogram.absent_prefix_len(), 33);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::IndicatorSeries;
use crate::indicators::crossover::{crossovers, Crossover};
use crate::indicators::divergence::{divergences, Divergence};
use crate::kernels::smoothing::ema_seeded;
use crate::series::{OhlcvPoint, OhlcvSeries};

/// Returns the number of leading absent points of the MACD line.
#[inline]
#[must_use]
pub const fn macd_line_lookback(fast_period: usize, slow_period: usize) -> usize {
    let longest = if fast_period > slow_period {
        fast_period
    } else {
        slow_period
    };
    longest.saturating_sub(1)
}

/// Returns the number of leading absent points of the signal line and
/// histogram.
///
/// ```
/// use ta_engine::indicators::macd::macd_lookback;
///
/// assert_eq!(macd_lookback(12, 26, 9), 33);
/// ```
#[inline]
#[must_use]
pub const fn macd_lookback(fast_period: usize, slow_period: usize, signal_period: usize) -> usize {
    macd_line_lookback(fast_period, slow_period).saturating_add(signal_period.saturating_sub(1))
}

/// The three MACD lines, each aligned with the input series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacdOutput {
    /// Fast EMA minus slow EMA.
    pub macd_line: IndicatorSeries,
    /// EMA of the MACD line.
    pub signal_line: IndicatorSeries,
    /// MACD line minus signal line.
    pub histogram: IndicatorSeries,
}

impl MacdOutput {
    /// Crossings of the MACD line over and under its signal line.
    ///
    /// A golden cross is the MACD line rising through the signal line.
    #[must_use]
    pub fn crossovers(&self) -> Vec<Crossover> {
        crossovers(&self.macd_line, &self.signal_line)
    }

    /// Divergences between the closes of `series` and the MACD line over a
    /// trailing window of `lookback` bars.
    ///
    /// `series` should be the series this output was computed from. An absent
    /// MACD value inside the window produces no signal.
    #[must_use]
    pub fn divergences(&self, series: &[OhlcvPoint], lookback: usize) -> Vec<Divergence> {
        divergences(series, &self.macd_line, lookback)
    }
}

/// EMA of the present values of `line`, realigned onto its timestamps.
fn signal_of(line: &IndicatorSeries, signal_period: usize) -> IndicatorSeries {
    let compacted = line.compact();
    let values: Vec<f64> = compacted.iter().map(|&(_, v)| v).collect();

    let smoothed: Vec<(i64, f64)> = compacted
        .iter()
        .zip(ema_seeded(&values, signal_period))
        .filter_map(|(&(ts, _), signal)| signal.map(|s| (ts, s)))
        .collect();

    IndicatorSeries::realign(&line.timestamps(), &smoothed)
}

fn difference(a: &IndicatorSeries, b: &IndicatorSeries) -> Vec<Option<f64>> {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| Some(x.value? - y.value?))
        .collect()
}

/// Computes MACD over the closes.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
#[must_use = "this returns a Result with the MACD lines, which should be used"]
pub fn macd(series: &[OhlcvPoint], params: MacdParams) -> Result<MacdOutput> {
    series.validate()?;

    let closes = series.closes();
    let timestamps = series.timestamps();

    let fast = ema_seeded(&closes, params.fast_period);
    let slow = ema_seeded(&closes, params.slow_period);
    let line_values = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();
    let macd_line = IndicatorSeries::from_values(&timestamps, line_values);

    let signal_line = signal_of(&macd_line, params.signal_period);
    let histogram = IndicatorSeries::from_values(&timestamps, difference(&macd_line, &signal_line));

    Ok(MacdOutput {
        macd_line,
        signal_line,
        histogram,
    })
}

/// MACD configuration.
///
/// Defaults: fast 12, slow 26, signal 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MacdParams {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl MacdParams {
    /// Creates a configuration with the default periods.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fast EMA period.
    #[must_use]
    pub const fn fast_period(mut self, period: usize) -> Self {
        self.fast_period = period;
        self
    }

    /// Sets the slow EMA period.
    #[must_use]
    pub const fn slow_period(mut self, period: usize) -> Self {
        self.slow_period = period;
        self
    }

    /// Sets the signal EMA period.
    #[must_use]
    pub const fn signal_period(mut self, period: usize) -> Self {
        self.signal_period = period;
        self
    }

    /// Returns the fast EMA period.
    #[must_use]
    pub const fn get_fast_period(&self) -> usize {
        self.fast_period
    }

    /// Returns the slow EMA period.
    #[must_use]
    pub const fn get_slow_period(&self) -> usize {
        self.slow_period
    }

    /// Returns the signal EMA period.
    #[must_use]
    pub const fn get_signal_period(&self) -> usize {
        self.signal_period
    }

    /// Returns the signal line lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        macd_lookback(self.fast_period, self.slow_period, self.signal_period)
    }

    /// Computes MACD using this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the series fails validation.
    pub fn compute(&self, series: &[OhlcvPoint]) -> Result<MacdOutput> {
        macd(series, *self)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::indicators::crossover::CrossKind;
    use crate::indicators::divergence::{DivergenceKind, DEFAULT_DIVERGENCE_LOOKBACK};
    use crate::indicators::ema::{ema, EmaParams};
    use crate::test_util::closes_series;

    const EPSILON: f64 = 1e-10;

    fn wave(n: usize) -> Vec<OhlcvPoint> {
        let closes: Vec<f64> = (0..n).map(|i| 100.0 + (i as f64 * 0.15).sin() * 8.0).collect();
        closes_series(&closes)
    }

    #[test]
    fn test_macd_line_is_ema_difference() {
        let series = wave(80);
        let out = macd(&series, MacdParams::default()).unwrap();
        let fast = ema(&series, EmaParams::new().period(12)).unwrap();
        let slow = ema(&series, EmaParams::new().period(26)).unwrap();
        for i in 0..80 {
            match (fast.value_at(i), slow.value_at(i)) {
                (Some(f), Some(s)) => assert!((out.macd_line.value_at(i).unwrap() - (f - s)).abs() < EPSILON),
                _ => assert_eq!(out.macd_line.value_at(i), None),
            }
        }
    }

    #[test]
    fn test_histogram_is_line_minus_signal() {
        let out = macd(&wave(100), MacdParams::default()).unwrap();
        for i in 0..100 {
            match (out.macd_line.value_at(i), out.signal_line.value_at(i)) {
                (Some(m), Some(s)) => assert_eq!(out.histogram.value_at(i), Some(m - s)),
                _ => assert_eq!(out.histogram.value_at(i), None),
            }
        }
    }

    #[test]
    fn test_signal_is_ema_of_compacted_line() {
        let out = macd(&wave(60), MacdParams::new().fast_period(3).slow_period(6).signal_period(4)).unwrap();
        let values: Vec<f64> = out.macd_line.compact().into_iter().map(|(_, v)| v).collect();
        let expected = ema_seeded(&values, 4);
        // the compacted line starts at index 5
        for (k, e) in expected.iter().enumerate() {
            assert_eq!(out.signal_line.value_at(k + 5), *e);
        }
    }

    #[test]
    fn test_lookbacks() {
        let params = MacdParams::default();
        let out = params.compute(&wave(120)).unwrap();
        assert_eq!(out.macd_line.absent_prefix_len(), macd_line_lookback(12, 26));
        assert_eq!(out.signal_line.absent_prefix_len(), params.lookback());
        assert_eq!(out.histogram.absent_prefix_len(), params.lookback());
    }

    #[test]
    fn test_fast_not_below_slow_is_accepted() {
        let series = wave(50);
        let out = macd(&series, MacdParams::new().fast_period(26).slow_period(12)).unwrap();
        assert_eq!(out.macd_line.len(), 50);
        assert_eq!(out.macd_line.absent_prefix_len(), 25);

        let same = macd(&series, MacdParams::new().fast_period(10).slow_period(10)).unwrap();
        assert!(same.macd_line.values().into_iter().flatten().all(|v| v == 0.0));
    }

    #[test]
    fn test_short_series_is_all_absent() {
        let out = macd(&wave(20), MacdParams::default()).unwrap();
        assert_eq!(out.macd_line.len(), 20);
        assert_eq!(out.macd_line.present_count(), 0);
        assert_eq!(out.signal_line.present_count(), 0);
        assert_eq!(out.histogram.present_count(), 0);
    }

    #[test]
    fn test_signal_absent_when_line_too_short() {
        // 30 bars: the line has 5 values, fewer than the signal period
        let out = macd(&wave(30), MacdParams::default()).unwrap();
        assert_eq!(out.macd_line.present_count(), 5);
        assert_eq!(out.signal_line.present_count(), 0);
    }

    #[test]
    fn test_crossovers_follow_signal() {
        let out = macd(&wave(200), MacdParams::default()).unwrap();
        let found = out.crossovers();
        assert!(!found.is_empty());
        for cross in &found {
            let hist = out.histogram.value_at(cross.index).unwrap();
            match cross.kind {
                CrossKind::Golden => assert!(hist > 0.0),
                CrossKind::Death => assert!(hist < 0.0),
            }
        }
    }

    #[test]
    fn test_lookback_saturates_on_huge_periods() {
        assert_eq!(macd_lookback(usize::MAX, 1, usize::MAX), usize::MAX);
        assert_eq!(macd_lookback(1, usize::MAX, 2), usize::MAX);
        let params = MacdParams::new().fast_period(usize::MAX).slow_period(1).signal_period(usize::MAX);
        assert_eq!(params.lookback(), usize::MAX);
        assert_eq!(params.compute(&wave(10)).unwrap().histogram.present_count(), 0);
    }

    /// An accelerating move that then slows: price keeps making new extremes
    /// while the MACD line turns back.
    fn exhausted_trend(sign: f64) -> Vec<OhlcvPoint> {
        let mut closes: Vec<f64> = (0..60).map(|i| 100.0 + sign * 0.05 * (i * i) as f64).collect();
        let last = closes[59];
        closes.extend((1..=30).map(|k| last + sign * 0.1 * k as f64));
        closes_series(&closes)
    }

    #[test]
    fn test_bullish_divergence_after_selloff_slows() {
        let series = exhausted_trend(-1.0);
        let found = macd(&series, MacdParams::default())
            .unwrap()
            .divergences(&series, DEFAULT_DIVERGENCE_LOOKBACK);
        assert_eq!(found.len(), 29);
        assert_eq!(found[0].index, 61);
        assert!(found.iter().all(|d| d.kind == DivergenceKind::Bullish));
    }

    #[test]
    fn test_bearish_divergence_after_rally_slows() {
        let series = exhausted_trend(1.0);
        let found = macd(&series, MacdParams::default())
            .unwrap()
            .divergences(&series, DEFAULT_DIVERGENCE_LOOKBACK);
        assert_eq!(found.len(), 29);
        assert_eq!(found[0].index, 61);
        assert!(found.iter().all(|d| d.kind == DivergenceKind::Bearish));
    }

    #[test]
    fn test_divergence_needs_a_full_present_window() {
        // the MACD line starts at 25, so no window is complete before 45
        let series = exhausted_trend(-1.0);
        let out = macd(&series[..45], MacdParams::default()).unwrap();
        assert!(out.divergences(&series[..45], DEFAULT_DIVERGENCE_LOOKBACK).is_empty());
    }
}
