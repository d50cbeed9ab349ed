//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use ta_engine::prelude::*;
//!
//! let series: Vec<OhlcvPoint> = (0..30)
//!     .map(|i| {
//!         let c = 50.0 + f64::from(i % 4);
//!         OhlcvPoint::new(i64::from(i) * 60_000, c, c + 0.5, c - 0.5, c, 10.0)
//!     })
//!     .collect();
//!
//! let average = sma(&series, SmaParams::new().period(5)).unwrap();
//! let bands = bollinger(&series, BollingerParams::default()).unwrap();
//! assert_eq!(average.len(), bands.middle.len());
//! ```
//!
//! # Contents
//!
//! - [`Error`], [`SeriesError`] and [`Result`]
//! - [`OhlcvPoint`], the [`OhlcvSeries`] extension trait, [`IndicatorPoint`]
//!   and [`IndicatorSeries`]
//! - every indicator function, its params struct and output type
//! - the batch entry points [`compute_all`] and [`BatchProcessor`]

pub use crate::batch::{compute_all, BatchProcessor, IndicatorOutput, IndicatorRequest};
pub use crate::error::{Error, Result, SeriesError};
pub use crate::indicator_series::{IndicatorPoint, IndicatorSeries};
pub use crate::series::{OhlcvPoint, OhlcvSeries};
pub use crate::traits::SeriesElement;

pub use crate::indicators::{
    bollinger, crossovers, divergences, ema, ema_crossovers, macd, roc, rsi, sar, sma, sma_crossovers, stochastic,
    williams_r, wma,
};
pub use crate::indicators::{
    BollingerOutput, BollingerParams, CrossKind, Crossover, Divergence, DivergenceKind, EmaParams, MacdOutput,
    MacdParams, RocParams, RsiParams, SarParams, SmaParams, StochasticOutput, StochasticParams, WilliamsRParams, WmaParams,
};
