//! Slice-level building blocks shared by the indicators.
//!
//! Kernels are generic over [`SeriesElement`](crate::traits::SeriesElement)
//! and know nothing about bars or timestamps: they take plain slices and
//! return one `Option<T>` per input element, `None` marking positions where
//! no value can be computed yet.
//!
//! - [`window`]: strict and gap-tolerant moving averages, rolling deviation
//! - [`smoothing`]: seeded EMA and Wilder's smoothing step
//! - [`rolling_extrema`]: O(n) rolling highest/lowest

pub mod rolling_extrema;
pub mod smoothing;
pub mod window;
