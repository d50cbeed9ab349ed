//! ta-engine: technical indicators over OHLCV bar series
//!
//! Computes moving averages, oscillators, bands and trend indicators over a
//! time-ordered series of [`OhlcvPoint`] bars. Every output is an
//! [`IndicatorSeries`] aligned one-to-one with the input: same length, same
//! timestamps, with points that cannot be computed marked absent.
//!
//! # Quick Start
//!
//! ```
//! use ta_engine::prelude::*;
//!
//! let series: Vec<OhlcvPoint> = [1.0, 2.0, 3.0, 4.0, 5.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &c)| OhlcvPoint::new(i as i64 * 60_000, c, c, c, c, 0.0))
//!     .collect();
//!
//! let result = sma(&series, SmaParams::new().period(3)).unwrap();
//!
//! // the first two points are absent, not NaN and not zero
//! assert_eq!(result.value_at(0), None);
//! assert_eq!(result.value_at(1), None);
//! assert_eq!(result.value_at(2), Some(2.0));
//! assert_eq!(result[4].timestamp, 240_000);
//! ```
//!
//! # Available Indicators
//!
//! ## Moving Averages
//! - [`indicators::sma()`], [`indicators::wma()`], [`indicators::ema()`]
//!
//! ## Momentum
//! - [`indicators::rsi()`]: Relative Strength Index (Wilder)
//! - [`indicators::stochastic()`]: Slow Stochastic %K/%D
//! - [`indicators::williams_r()`]: Williams %R
//! - [`indicators::roc()`]: Rate of Change
//!
//! ## Volatility and Trend
//! - [`indicators::bollinger()`]: Bollinger Bands
//! - [`indicators::sar()`]: Parabolic SAR
//! - [`indicators::macd()`]: MACD
//!
//! ## Signals and batches
//! - [`indicators::crossovers()`]: golden/death crosses
//! - [`indicators::divergences()`]: unconfirmed price extremes
//! - [`batch::compute_all()`]: many indicators over one series
//!
//! # Error Handling
//!
//! The only failure is an invalid input series:
//!
//! ```
//! use ta_engine::prelude::*;
//!
//! let result = rsi(&[], RsiParams::default());
//! assert_eq!(result, Err(Error::InvalidSeries(SeriesError::Empty)));
//!
//! // a period longer than the series is not an error
//! let bar = OhlcvPoint::new(0, 1.0, 1.0, 1.0, 1.0, 0.0);
//! let result = sma(&[bar], SmaParams::new().period(10)).unwrap();
//! assert_eq!(result.present_count(), 0);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): rayon-backed batch evaluation
//! - `serde` (default): serialization of bars, outputs and parameters

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod error;
pub mod indicator_series;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod series;
pub mod traits;

#[cfg(test)]
mod test_util;

pub use error::{Error, Result, SeriesError};
pub use indicator_series::{IndicatorPoint, IndicatorSeries};
pub use series::{OhlcvPoint, OhlcvSeries};
pub use traits::SeriesElement;
