//! Batch evaluation of indicators.
//!
//! Two shapes of batch work are supported:
//!
//! - **Many indicators, one series**: [`compute_all`] evaluates a list of
//!   [`IndicatorRequest`]s against a single series.
//! - **One computation, many series**: [`BatchProcessor`] maps a closure over
//!   independent series.
//!
//! Indicator calls share no state, so both run in parallel with rayon when
//! the `parallel` feature is enabled (the default). Results always come back
//! in input order.
//!
//! # Requests as configuration
//!
//! With the `serde` feature, requests deserialize from JSON tagged by `kind`;
//! omitted parameters take their defaults:
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn main() {
//! use ta_engine::batch::IndicatorRequest;
//! use ta_engine::indicators::{BollingerParams, RsiParams};
//!
//! let json = r#"[
//!     { "kind": "rsi" },
//!     { "kind": "bollinger", "period": 10, "multiplier": 2.5 }
//! ]"#;
//!
//! let requests: Vec<IndicatorRequest> = serde_json::from_str(json).unwrap();
//! assert_eq!(requests[0], IndicatorRequest::Rsi(RsiParams::default()));
//! assert_eq!(
//!     requests[1],
//!     IndicatorRequest::Bollinger(BollingerParams::new().period(10).multiplier(2.5))
//! );
//! # }
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator_series::IndicatorSeries;
use crate::indicators::{
    BollingerOutput, BollingerParams, EmaParams, MacdOutput, MacdParams, RocParams, RsiParams, SarParams,
    SmaParams, StochasticOutput, StochasticParams, WilliamsRParams, WmaParams,
};
use crate::series::{OhlcvPoint, OhlcvSeries};

/// One indicator with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum IndicatorRequest {
    /// Simple Moving Average.
    Sma(SmaParams),
    /// Weighted Moving Average.
    Wma(WmaParams),
    /// Exponential Moving Average.
    Ema(EmaParams),
    /// Relative Strength Index.
    Rsi(RsiParams),
    /// MACD line, signal and histogram.
    Macd(MacdParams),
    /// Bollinger Bands.
    Bollinger(BollingerParams),
    /// Slow Stochastic.
    Stochastic(StochasticParams),
    /// Williams %R.
    WilliamsR(WilliamsRParams),
    /// Rate of Change.
    Roc(RocParams),
    /// Parabolic SAR.
    Sar(SarParams),
}

impl IndicatorRequest {
    /// Short lowercase name of the indicator, matching the serde tag.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sma(_) => "sma",
            Self::Wma(_) => "wma",
            Self::Ema(_) => "ema",
            Self::Rsi(_) => "rsi",
            Self::Macd(_) => "macd",
            Self::Bollinger(_) => "bollinger",
            Self::Stochastic(_) => "stochastic",
            Self::WilliamsR(_) => "williams_r",
            Self::Roc(_) => "roc",
            Self::Sar(_) => "sar",
        }
    }

    /// Number of leading absent points the indicator produces on a long
    /// enough series. For multi-line indicators this is the slowest line.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        match self {
            Self::Sma(p) => p.lookback(),
            Self::Wma(p) => p.lookback(),
            Self::Ema(p) => p.lookback(),
            Self::Rsi(p) => p.lookback(),
            Self::Macd(p) => p.lookback(),
            Self::Bollinger(p) => p.lookback(),
            Self::Stochastic(p) => p.lookback(),
            Self::WilliamsR(p) => p.lookback(),
            Self::Roc(p) => p.lookback(),
            Self::Sar(p) => p.lookback(),
        }
    }

    /// Runs the indicator over `series`.
    ///
    /// # Errors
    ///
    /// Returns an error if the series fails validation.
    pub fn compute(&self, series: &[OhlcvPoint]) -> Result<IndicatorOutput> {
        Ok(match self {
            Self::Sma(p) => IndicatorOutput::Line(p.compute(series)?),
            Self::Wma(p) => IndicatorOutput::Line(p.compute(series)?),
            Self::Ema(p) => IndicatorOutput::Line(p.compute(series)?),
            Self::Rsi(p) => IndicatorOutput::Line(p.compute(series)?),
            Self::Macd(p) => IndicatorOutput::Macd(p.compute(series)?),
            Self::Bollinger(p) => IndicatorOutput::Bollinger(p.compute(series)?),
            Self::Stochastic(p) => IndicatorOutput::Stochastic(p.compute(series)?),
            Self::WilliamsR(p) => IndicatorOutput::Line(p.compute(series)?),
            Self::Roc(p) => IndicatorOutput::Line(p.compute(series)?),
            Self::Sar(p) => IndicatorOutput::Line(p.compute(series)?),
        })
    }
}

/// Result of one [`IndicatorRequest`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IndicatorOutput {
    /// A single-line indicator.
    Line(IndicatorSeries),
    /// MACD lines.
    Macd(MacdOutput),
    /// Bollinger bands.
    Bollinger(BollingerOutput),
    /// Stochastic lines.
    Stochastic(StochasticOutput),
}

impl IndicatorOutput {
    /// Returns the single line, if this is a single-line output.
    #[must_use]
    pub const fn as_line(&self) -> Option<&IndicatorSeries> {
        match self {
            Self::Line(line) => Some(line),
            _ => None,
        }
    }

    /// Returns the MACD lines, if this is a MACD output.
    #[must_use]
    pub const fn as_macd(&self) -> Option<&MacdOutput> {
        match self {
            Self::Macd(out) => Some(out),
            _ => None,
        }
    }

    /// Returns the bands, if this is a Bollinger output.
    #[must_use]
    pub const fn as_bollinger(&self) -> Option<&BollingerOutput> {
        match self {
            Self::Bollinger(out) => Some(out),
            _ => None,
        }
    }

    /// Returns the stochastic lines, if this is a stochastic output.
    #[must_use]
    pub const fn as_stochastic(&self) -> Option<&StochasticOutput> {
        match self {
            Self::Stochastic(out) => Some(out),
            _ => None,
        }
    }

    /// Number of points in each line (the input series length).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Line(line) => line.len(),
            Self::Macd(out) => out.macd_line.len(),
            Self::Bollinger(out) => out.middle.len(),
            Self::Stochastic(out) => out.percent_k.len(),
        }
    }

    /// Returns true if the output holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evaluates every request against `series`, returning outputs in request
/// order.
///
/// The series is validated before any request is dispatched, so an invalid
/// series fails without doing indicator work.
///
/// # Errors
///
/// Returns [`Error::InvalidSeries`](crate::error::Error::InvalidSeries) if the
/// series is empty or its timestamps are not strictly increasing.
///
/// # Example
///
/// ```
/// use ta_engine::batch::{compute_all, IndicatorRequest};
/// use ta_engine::indicators::{MacdParams, SmaParams};
/// use ta_engine::series::OhlcvPoint;
///
/// let series: Vec<OhlcvPoint> = (0..50)
///     .map(|i| {
///         let c = 10.0 + f64::from(i);
///         OhlcvPoint::new(i64::from(i), c, c, c, c, 1.0)
///     })
///     .collect();
///
/// let requests = [
///     IndicatorRequest::Sma(SmaParams::new().period(5)),
///     IndicatorRequest::Macd(MacdParams::default()),
/// ];
/// let outputs = compute_all(&series, &requests).unwrap();
///
/// assert_eq!(outputs.len(), 2);
/// assert_eq!(outputs[0].as_line().unwrap().value_at(4), Some(12.0));
/// assert!(outputs[1].as_macd().is_some());
/// ```
pub fn compute_all(series: &[OhlcvPoint], requests: &[IndicatorRequest]) -> Result<Vec<IndicatorOutput>> {
    series.validate()?;
    tracing::trace!(requests = requests.len(), bars = series.len(), "dispatching indicator batch");

    #[cfg(feature = "parallel")]
    let outputs = requests.par_iter().map(|request| request.compute(series)).collect();
    #[cfg(not(feature = "parallel"))]
    let outputs = requests.iter().map(|request| request.compute(series)).collect();

    outputs
}

/// Runs one computation over many independent series.
///
/// Below `min_parallel_threshold` series the work stays on the calling
/// thread; above it, series are spread across the rayon pool.
///
/// # Example
///
/// ```
/// use ta_engine::batch::BatchProcessor;
/// use ta_engine::indicators::{rsi, RsiParams};
/// use ta_engine::series::OhlcvPoint;
///
/// let make = |offset: f64| -> Vec<OhlcvPoint> {
///     (0..30)
///         .map(|i| {
///             let c = offset + f64::from(i % 5);
///             OhlcvPoint::new(i64::from(i), c, c, c, c, 1.0)
///         })
///         .collect()
/// };
/// let universe = vec![make(10.0), make(20.0), make(30.0)];
///
/// let results = BatchProcessor::new()
///     .process(&universe, |s| rsi(s, RsiParams::default()))
///     .unwrap();
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProcessor {
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a processor that parallelizes from 64 series upward.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: 64,
        }
    }

    /// Sets the number of series below which processing stays sequential.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the sequential threshold.
    #[must_use]
    pub const fn get_min_parallel_threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Applies `indicator_fn` to every series, returning results in order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(feature = "parallel")]
    pub fn process<F, R>(&self, series: &[Vec<OhlcvPoint>], indicator_fn: F) -> Result<Vec<R>>
    where
        F: Fn(&[OhlcvPoint]) -> Result<R> + Send + Sync,
        R: Send,
    {
        tracing::trace!(series = series.len(), threshold = self.min_parallel_threshold, "batch process");
        if series.len() < self.min_parallel_threshold {
            series.iter().map(|s| indicator_fn(s)).collect()
        } else {
            series.par_iter().map(|s| indicator_fn(s)).collect()
        }
    }

    /// Applies `indicator_fn` to every series, returning results in order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(not(feature = "parallel"))]
    pub fn process<F, R>(&self, series: &[Vec<OhlcvPoint>], indicator_fn: F) -> Result<Vec<R>>
    where
        F: Fn(&[OhlcvPoint]) -> Result<R>,
    {
        tracing::trace!(series = series.len(), "batch process");
        series.iter().map(|s| indicator_fn(s)).collect()
    }
}

/// Applies `indicator_fn` to every series with a default [`BatchProcessor`].
///
/// # Errors
///
/// Returns the first error produced by `indicator_fn`.
#[cfg(feature = "parallel")]
pub fn process_batch<F, R>(series: &[Vec<OhlcvPoint>], indicator_fn: F) -> Result<Vec<R>>
where
    F: Fn(&[OhlcvPoint]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process(series, indicator_fn)
}

/// Applies `indicator_fn` to every series with a default [`BatchProcessor`].
///
/// # Errors
///
/// Returns the first error produced by `indicator_fn`.
#[cfg(not(feature = "parallel"))]
pub fn process_batch<F, R>(series: &[Vec<OhlcvPoint>], indicator_fn: F) -> Result<Vec<R>>
where
    F: Fn(&[OhlcvPoint]) -> Result<R>,
{
    BatchProcessor::new().process(series, indicator_fn)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::{Error, SeriesError};
    use crate::indicators::{bollinger, macd, rsi, sma, stochastic};
    use crate::test_util::{closes_series, hlc_series};

    fn sample() -> Vec<OhlcvPoint> {
        let bars: Vec<(f64, f64, f64)> = (0..80)
            .map(|i| {
                let mid = 100.0 + (i as f64 * 0.21).sin() * 6.0;
                (mid + 1.5, mid - 1.5, mid + 0.4)
            })
            .collect();
        hlc_series(&bars)
    }

    fn every_request() -> Vec<IndicatorRequest> {
        vec![
            IndicatorRequest::Sma(SmaParams::default()),
            IndicatorRequest::Wma(WmaParams::default()),
            IndicatorRequest::Ema(EmaParams::default()),
            IndicatorRequest::Rsi(RsiParams::default()),
            IndicatorRequest::Macd(MacdParams::default()),
            IndicatorRequest::Bollinger(BollingerParams::default()),
            IndicatorRequest::Stochastic(StochasticParams::default()),
            IndicatorRequest::WilliamsR(WilliamsRParams::default()),
            IndicatorRequest::Roc(RocParams::default()),
            IndicatorRequest::Sar(SarParams::default()),
        ]
    }

    #[test]
    fn test_compute_all_matches_direct_calls() {
        let series = sample();
        let outputs = compute_all(&series, &every_request()).unwrap();
        assert_eq!(outputs.len(), 10);

        assert_eq!(outputs[0].as_line(), Some(&sma(&series, SmaParams::default()).unwrap()));
        assert_eq!(outputs[3].as_line(), Some(&rsi(&series, RsiParams::default()).unwrap()));
        assert_eq!(outputs[4].as_macd(), Some(&macd(&series, MacdParams::default()).unwrap()));
        assert_eq!(
            outputs[5].as_bollinger(),
            Some(&bollinger(&series, BollingerParams::default()).unwrap())
        );
        assert_eq!(
            outputs[6].as_stochastic(),
            Some(&stochastic(&series, StochasticParams::default()).unwrap())
        );
        for output in &outputs {
            assert_eq!(output.len(), series.len());
        }
    }

    #[test]
    fn test_compute_all_rejects_invalid_series() {
        assert_eq!(
            compute_all(&[], &every_request()),
            Err(Error::InvalidSeries(SeriesError::Empty))
        );
    }

    #[test]
    fn test_compute_all_empty_requests() {
        assert!(compute_all(&sample(), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_request_lookback_and_name() {
        let series = sample();
        for request in every_request() {
            let output = request.compute(&series).unwrap();
            if let Some(line) = output.as_line() {
                assert_eq!(line.absent_prefix_len(), request.lookback(), "{}", request.name());
            }
        }
        assert_eq!(IndicatorRequest::WilliamsR(WilliamsRParams::default()).name(), "williams_r");
    }

    #[test]
    fn test_request_lookback_saturates_on_huge_periods() {
        let max = usize::MAX;
        let requests = [
            IndicatorRequest::Macd(MacdParams::new().fast_period(max).slow_period(1).signal_period(max)),
            IndicatorRequest::Stochastic(StochasticParams::new().k_period(max).d_period(max).smooth_k(max)),
            IndicatorRequest::Rsi(RsiParams::new().period(max)),
            IndicatorRequest::Wma(WmaParams::new().period(max)),
        ];
        let series = sample();
        for request in &requests {
            assert!(request.lookback() >= max - 1, "{}", request.name());
            assert_eq!(request.compute(&series).unwrap().len(), series.len());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialized_request_lookback_saturates() {
        let json = r#"{"kind":"macd","fast_period":18446744073709551615,"slow_period":1,"signal_period":18446744073709551615}"#;
        let request: IndicatorRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.lookback(), usize::MAX);
    }

    #[test]
    fn test_batch_processor_sequential_and_parallel_agree() {
        let universe: Vec<Vec<OhlcvPoint>> = (0..10)
            .map(|k| closes_series(&(0..25).map(|i| (k * 10 + i) as f64).collect::<Vec<_>>()))
            .collect();
        let run = |threshold| {
            BatchProcessor::new()
                .min_parallel_threshold(threshold)
                .process(&universe, |s| sma(s, SmaParams::new().period(3)))
                .unwrap()
        };
        let sequential = run(1000);
        let parallel = run(0);
        assert_eq!(sequential, parallel);
        assert_eq!(sequential[2].value_at(2), Some(21.0));
    }

    #[test]
    fn test_batch_processor_propagates_errors() {
        let universe = vec![closes_series(&[1.0, 2.0]), Vec::new()];
        let result = process_batch(&universe, |s| sma(s, SmaParams::default()));
        assert_eq!(result, Err(Error::InvalidSeries(SeriesError::Empty)));
    }

    #[test]
    fn test_batch_processor_default_threshold() {
        assert_eq!(BatchProcessor::default().get_min_parallel_threshold(), 64);
    }
}
