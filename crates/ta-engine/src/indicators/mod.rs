//! Technical analysis indicators over OHLCV series.
//!
//! Every indicator is a pure function `fn(&[OhlcvPoint], Params) -> Result<Output>`
//! plus a params struct with builder setters and a `compute` method.
//!
//! # Indicator Categories
//!
//! ## Moving Averages
//!
//! - [`sma`] - Simple Moving Average
//! - [`wma`] - Linearly Weighted Moving Average
//! - [`ema`] - Exponential Moving Average, SMA-seeded
//!
//! ## Momentum
//!
//! - [`rsi`] - Relative Strength Index with Wilder's smoothing
//! - [`stochastic`] - Slow Stochastic %K/%D
//! - [`williams_r`] - Williams %R
//! - [`roc`] - Rate of Change
//!
//! ## Volatility and Trend
//!
//! - [`bollinger`] - Bollinger Bands with bandwidth
//! - [`sar`] - Parabolic SAR
//! - [`macd`] - MACD line, signal line and histogram
//!
//! ## Signals
//!
//! - [`crossovers`] - golden/death crosses between two lines
//! - [`divergence`] - new price extremes the indicator does not confirm
//!
//! # Alignment
//!
//! Outputs always have one point per input bar, carrying the bar's timestamp.
//! Points that cannot be computed (warm-up, zero divisor) are absent
//! (`value: None`), never `NaN` and never `0.0`.
//!
//! # Error Handling
//!
//! The only error is [`Error::InvalidSeries`](crate::error::Error::InvalidSeries),
//! raised before any computation for an empty series or non-increasing
//! timestamps. Degenerate periods and flat price ranges are not errors.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::{ema, rsi, sma, EmaParams, RsiParams, SmaParams};
//! use ta_engine::series::OhlcvPoint;
//!
//! let closes = [44.0, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//! let series: Vec<OhlcvPoint> = closes
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &c)| OhlcvPoint::new(i as i64 * 60_000, c, c, c, c, 100.0))
//!     .collect();
//!
//! let sma5 = sma(&series, SmaParams::new().period(5)).unwrap();
//! let ema5 = ema(&series, EmaParams::new().period(5)).unwrap();
//! let rsi5 = rsi(&series, RsiParams::new().period(5)).unwrap();
//!
//! assert_eq!(sma5.len(), series.len());
//! assert_eq!(ema5.absent_prefix_len(), 4);
//! assert_eq!(rsi5.absent_prefix_len(), 5);
//! ```
//!
//! [`OhlcvPoint`]: crate::series::OhlcvPoint

pub mod bollinger;
pub mod crossover;
pub mod divergence;
pub mod ema;
pub mod macd;
pub mod roc;
pub mod rsi;
pub mod sar;
pub mod sma;
pub mod stochastic;
pub mod williams_r;
pub mod wma;

pub use bollinger::{bollinger, bollinger_lookback, BollingerOutput, BollingerParams};
pub use crossover::{crossovers, ema_crossovers, sma_crossovers, CrossKind, Crossover};
pub use divergence::{divergences, Divergence, DivergenceKind, DEFAULT_DIVERGENCE_LOOKBACK};
pub use ema::{ema, ema_lookback, EmaParams};
pub use macd::{macd, macd_line_lookback, macd_lookback, MacdOutput, MacdParams};
pub use roc::{roc, roc_lookback, RocParams};
pub use rsi::{rsi, rsi_lookback, RsiParams};
pub use sar::{sar, sar_lookback, SarParams};
pub use sma::{sma, sma_lookback, SmaParams};
pub use stochastic::{stochastic, stochastic_k_lookback, stochastic_lookback, StochasticOutput, StochasticParams};
pub use williams_r::{williams_r, williams_r_lookback, WilliamsRParams};
pub use wma::{wma, wma_lookback, WmaParams};
