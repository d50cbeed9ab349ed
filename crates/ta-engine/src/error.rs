//! Error types for ta-engine.
//!
//! The engine has a single error class: the input series itself is unusable.
//! Everything else an indicator can run into (zero divisors, flat price
//! ranges, periods longer than the data) is expressed in the output as a
//! sentinel value or an absent point, never as an `Err`.

use thiserror::Error;

/// The main error type for ta-engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input series failed validation.
    ///
    /// Returned before any computation starts; no partial output is produced.
    #[error("invalid series: {0}")]
    InvalidSeries(#[from] SeriesError),
}

/// The specific way a series failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// The series contains no points.
    #[error("empty input: no data provided")]
    Empty,

    /// A timestamp did not strictly increase over its predecessor.
    #[error("timestamp {current} at index {index} does not follow {previous}")]
    NonIncreasingTimestamp {
        /// Index of the offending point.
        index: usize,
        /// Timestamp of the point at `index - 1`.
        previous: i64,
        /// Timestamp of the point at `index`.
        current: i64,
    },
}

impl Error {
    /// Returns the underlying series violation.
    #[must_use]
    pub const fn series_error(&self) -> SeriesError {
        match self {
            Self::InvalidSeries(err) => *err,
        }
    }
}

/// Convenience type alias for Results using the ta-engine Error type.
pub type Result<T> = std::result::Result<T, Error>;
