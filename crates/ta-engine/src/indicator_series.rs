//! Aligned indicator output.
//!
//! Every indicator returns one [`IndicatorPoint`] per input bar, carrying the
//! bar's timestamp. Points without a value (warm-up, guarded divisions) hold
//! `None`, so a chart can render a gap instead of a false zero crossing.

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single indicator value aligned to an input bar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndicatorPoint {
    /// Timestamp of the input bar this value belongs to.
    pub timestamp: i64,
    /// The computed value, or `None` when it is absent.
    pub value: Option<f64>,
}

impl IndicatorPoint {
    /// Creates a point with a value.
    #[must_use]
    pub const fn present(timestamp: i64, value: f64) -> Self {
        Self {
            timestamp,
            value: Some(value),
        }
    }

    /// Creates an absent point.
    #[must_use]
    pub const fn absent(timestamp: i64) -> Self {
        Self {
            timestamp,
            value: None,
        }
    }

    /// Returns true if the point holds a value.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// An indicator series with exactly one point per input bar.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IndicatorSeries {
    points: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// Zips timestamps with computed values.
    ///
    /// Both inputs come from the same series; if their lengths ever differ the
    /// output is truncated to the shorter one.
    #[must_use]
    pub fn from_values(timestamps: &[i64], values: Vec<Option<f64>>) -> Self {
        let points = timestamps
            .iter()
            .zip(values)
            .map(|(&timestamp, value)| IndicatorPoint { timestamp, value })
            .collect();
        Self { points }
    }

    /// Creates a series in which every point is absent.
    #[must_use]
    pub fn all_absent(timestamps: &[i64]) -> Self {
        let points = timestamps.iter().map(|&t| IndicatorPoint::absent(t)).collect();
        Self { points }
    }

    /// Re-expands compacted `(timestamp, value)` pairs onto a timestamp grid.
    ///
    /// Each grid timestamp takes the value of the pair with the same timestamp;
    /// grid timestamps without a match stay absent. Both inputs must be sorted
    /// by strictly increasing timestamp, which lets this run as a single
    /// merge walk.
    #[must_use]
    pub fn realign(grid: &[i64], compacted: &[(i64, f64)]) -> Self {
        let mut pairs = compacted.iter().peekable();
        let points = grid
            .iter()
            .map(|&timestamp| {
                while pairs.next_if(|(t, _)| *t < timestamp).is_some() {}
                let value = pairs.next_if(|(t, _)| *t == timestamp).map(|&(_, v)| v);
                IndicatorPoint { timestamp, value }
            })
            .collect();
        Self { points }
    }

    /// Returns the present points as `(timestamp, value)` pairs, in order.
    #[must_use]
    pub fn compact(&self) -> Vec<(i64, f64)> {
        self.points
            .iter()
            .filter_map(|p| p.value.map(|v| (p.timestamp, v)))
            .collect()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[IndicatorPoint] {
        &self.points
    }

    /// Consumes the series and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<IndicatorPoint> {
        self.points
    }

    /// Returns the values column.
    #[must_use]
    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Returns the timestamps column.
    #[must_use]
    pub fn timestamps(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    /// Returns the point at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&IndicatorPoint> {
        self.points.get(index)
    }

    /// Returns the value at `index`, or `None` if it is absent or out of range.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).and_then(|p| p.value)
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, IndicatorPoint> {
        self.points.iter()
    }

    /// Counts the points holding a value.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_present()).count()
    }

    /// Counts the leading absent points (the warm-up length).
    #[must_use]
    pub fn absent_prefix_len(&self) -> usize {
        self.points.iter().take_while(|p| !p.is_present()).count()
    }

    /// Returns the first point holding a value.
    #[must_use]
    pub fn first_present(&self) -> Option<&IndicatorPoint> {
        self.points.iter().find(|p| p.is_present())
    }

    /// Returns the last point holding a value.
    #[must_use]
    pub fn last_present(&self) -> Option<&IndicatorPoint> {
        self.points.iter().rev().find(|p| p.is_present())
    }
}

impl Index<usize> for IndicatorSeries {
    type Output = IndicatorPoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a IndicatorSeries {
    type Item = &'a IndicatorPoint;
    type IntoIter = std::slice::Iter<'a, IndicatorPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for IndicatorSeries {
    type Item = IndicatorPoint;
    type IntoIter = std::vec::IntoIter<IndicatorPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
