//! Rolling highest/lowest values using a monotonic deque.
//!
//! The deque holds indices whose values are monotonically ordered
//! (decreasing for a maximum, increasing for a minimum), so the front is
//! always the extremum of the current window. Each index is pushed and popped
//! at most once: O(n) overall instead of O(n·period) for a naive rescan.
//!
//! # Example
//!
//! ```
//! use ta_engine::kernels::rolling_extrema::{rolling_max, rolling_min};
//!
//! let data = [3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//!
//! let max = rolling_max(&data, 3);
//! assert_eq!(max[2], Some(4.0)); // max of [3, 1, 4]
//! assert_eq!(max[5], Some(9.0)); // max of [1, 5, 9]
//!
//! let min = rolling_min(&data, 3);
//! assert_eq!(min[2], Some(1.0));
//! assert_eq!(min[7], Some(2.0)); // min of [9, 2, 6]
//! ```

use std::collections::VecDeque;

use crate::kernels::window::is_degenerate;
use crate::traits::SeriesElement;

/// Which extremum a [`MonotonicDeque`] tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Track the window maximum.
    Max,
    /// Track the window minimum.
    Min,
}

impl Extremum {
    /// Returns true if `incoming` makes `existing` irrelevant for the rest of
    /// its lifetime in the window.
    #[inline]
    fn dominates<T: SeriesElement>(self, incoming: T, existing: T) -> bool {
        match self {
            Self::Max => incoming >= existing,
            Self::Min => incoming <= existing,
        }
    }
}

/// A sliding-window extremum tracker over indices into a data slice.
#[derive(Debug, Clone)]
pub struct MonotonicDeque {
    deque: VecDeque<usize>,
    period: usize,
    extremum: Extremum,
}

impl MonotonicDeque {
    /// Creates a tracker for windows of `period` elements.
    #[must_use]
    pub fn new(period: usize, extremum: Extremum) -> Self {
        Self {
            deque: VecDeque::with_capacity(period),
            period,
            extremum,
        }
    }

    /// Adds `data[index]` to the window and evicts indices that fell out.
    ///
    /// NaN values are never admitted, so they cannot become the extremum.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push<T: SeriesElement>(&mut self, index: usize, data: &[T]) {
        let value = data[index];
        if !value.is_nan() {
            while let Some(&back) = self.deque.back() {
                if self.extremum.dominates(value, data[back]) {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(index);
        }

        if index + 1 >= self.period {
            let window_start = index + 1 - self.period;
            while self.deque.front().is_some_and(|&front| front < window_start) {
                self.deque.pop_front();
            }
        }
    }

    /// Returns the index of the current extremum.
    #[inline]
    #[must_use]
    pub fn front_index(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Returns the current extremum value, or `None` if the window holds no
    /// admissible values.
    #[inline]
    #[must_use]
    pub fn extremum<T: SeriesElement>(&self, data: &[T]) -> Option<T> {
        self.front_index().map(|idx| data[idx])
    }
}

fn rolling_extremum<T: SeriesElement>(data: &[T], period: usize, extremum: Extremum) -> Vec<Option<T>> {
    let n = data.len();
    let mut out = vec![None; n];
    if is_degenerate(period, n) {
        return out;
    }

    let mut deque = MonotonicDeque::new(period, extremum);
    for i in 0..n {
        deque.push(i, data);
        if i + 1 >= period {
            out[i] = deque.extremum(data);
        }
    }
    out
}

/// Rolling maximum over a trailing window of `period` elements.
///
/// Indices before `period - 1` are `None`, as is the whole output for a zero
/// or oversized period.
#[must_use]
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Vec<Option<T>> {
    rolling_extremum(data, period, Extremum::Max)
}

/// Rolling minimum over a trailing window of `period` elements.
///
/// Same warm-up policy as [`rolling_max`].
#[must_use]
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Vec<Option<T>> {
    rolling_extremum(data, period, Extremum::Min)
}

/// Highest high and lowest low over the same trailing window.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRange<T> {
    /// Rolling maximum of the highs.
    pub highest: Vec<Option<T>>,
    /// Rolling minimum of the lows.
    pub lowest: Vec<Option<T>>,
}

impl<T: SeriesElement> PriceRange<T> {
    /// Computes the trailing range of a high/low pair.
    #[must_use]
    pub fn compute(high: &[T], low: &[T], period: usize) -> Self {
        Self {
            highest: rolling_max(high, period),
            lowest: rolling_min(low, period),
        }
    }

    /// Returns `(highest, lowest)` at `index` when both exist.
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> Option<(T, T)> {
        match (self.highest.get(index), self.lowest.get(index)) {
            (Some(&Some(h)), Some(&Some(l))) => Some((h, l)),
            _ => None,
        }
    }
}
