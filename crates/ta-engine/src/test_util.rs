//! Bar builders shared by the unit tests.

use crate::series::OhlcvPoint;

/// Spacing between consecutive test bars: one minute.
pub const STEP_MS: i64 = 60_000;

/// Builds bars whose open/high/low/close all equal the given close.
pub fn closes_series(closes: &[f64]) -> Vec<OhlcvPoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| OhlcvPoint::new(i as i64 * STEP_MS, c, c, c, c, 1_000.0))
        .collect()
}

/// Builds bars from `(high, low, close)` triples; open is the close.
pub fn hlc_series(bars: &[(f64, f64, f64)]) -> Vec<OhlcvPoint> {
    bars.iter()
        .enumerate()
        .map(|(i, &(h, l, c))| OhlcvPoint::new(i as i64 * STEP_MS, c, h, l, c, 1_000.0))
        .collect()
}

/// Builds bars from separate high and low columns; close is the midpoint.
pub fn high_low_series(high: &[f64], low: &[f64]) -> Vec<OhlcvPoint> {
    high.iter()
        .zip(low)
        .enumerate()
        .map(|(i, (&h, &l))| {
            let mid = (h + l) / 2.0;
            OhlcvPoint::new(i as i64 * STEP_MS, mid, h, l, mid, 1_000.0)
        })
        .collect()
}
