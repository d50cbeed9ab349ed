//! Shared test utilities for ta-engine integration tests.

use ta_engine::{IndicatorSeries, OhlcvPoint};

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// One minute in epoch milliseconds.
#[allow(dead_code)]
pub const MINUTE_MS: i64 = 60_000;

/// Approximate equality of two optional values; two absent values are equal.
#[allow(dead_code)]
pub fn approx_eq_opt(a: Option<f64>, b: Option<f64>, eps: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => (x - y).abs() < eps,
        _ => false,
    }
}

/// Bars whose open, high, low and close all equal the given closes.
#[allow(dead_code)]
pub fn bars_from_closes(closes: &[f64]) -> Vec<OhlcvPoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| OhlcvPoint::new(1_700_000_000_000 + i as i64 * MINUTE_MS, c, c, c, c, 1_000.0))
        .collect()
}

/// Bars from `(high, low, close)` triples.
#[allow(dead_code)]
pub fn bars_from_hlc(bars: &[(f64, f64, f64)]) -> Vec<OhlcvPoint> {
    bars.iter()
        .enumerate()
        .map(|(i, &(h, l, c))| OhlcvPoint::new(1_700_000_000_000 + i as i64 * MINUTE_MS, c, h, l, c, 1_000.0))
        .collect()
}

/// Deterministic, wave-shaped OHLCV data.
#[allow(dead_code)]
pub fn generate_ohlcv(n: usize) -> Vec<OhlcvPoint> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let close = 100.0 + (t * 0.1).sin() * 10.0 + (t * 0.037).cos() * 4.0;
            let open = close - (t * 0.23).sin();
            let high = open.max(close) + 0.5 + (t * 0.05).cos().abs();
            let low = open.min(close) - 0.5 - (t * 0.07).sin().abs();
            OhlcvPoint::new(i as i64 * MINUTE_MS, open, high, low, close, 1_000.0 + t)
        })
        .collect()
}

/// Asserts the full alignment invariant between a series and an output.
#[allow(dead_code)]
pub fn assert_aligned(series: &[OhlcvPoint], output: &IndicatorSeries) {
    assert_eq!(output.len(), series.len(), "length mismatch");
    for (i, (point, bar)) in output.iter().zip(series).enumerate() {
        assert_eq!(point.timestamp, bar.timestamp, "timestamp mismatch at {i}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_opt() {
        assert!(approx_eq_opt(None, None, EPSILON));
        assert!(approx_eq_opt(Some(1.0), Some(1.0 + 1e-12), EPSILON));
        assert!(!approx_eq_opt(Some(1.0), None, EPSILON));
    }

    #[test]
    fn test_generate_ohlcv_is_consistent() {
        for bar in generate_ohlcv(200) {
            assert!(bar.low <= bar.open.min(bar.close));
            assert!(bar.high >= bar.open.max(bar.close));
        }
    }
}
