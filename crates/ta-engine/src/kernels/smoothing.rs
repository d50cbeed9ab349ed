//! Recursive smoothing: the seeded EMA and Wilder's average.
//!
//! Both are left-to-right folds. The state (previous average) is threaded
//! through `scan` rather than written back into the output buffer.

use crate::kernels::window::is_degenerate;
use crate::traits::SeriesElement;

/// Returns the standard EMA smoothing factor `2 / (period + 1)`.
#[inline]
#[must_use]
pub fn ema_alpha<T: SeriesElement>(period: usize) -> T {
    T::two() / T::from_usize(period + 1)
}

/// Exponential moving average seeded with a simple average.
///
/// `out[period - 1]` is the mean of the first `period` values. From there on
/// `out[i] = (data[i] - out[i - 1]) * alpha + out[i - 1]` with
/// `alpha = 2 / (period + 1)`. Indices before the seed are `None`.
///
/// # Example
///
/// ```
/// use ta_engine::kernels::smoothing::ema_seeded;
///
/// let out = ema_seeded(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3);
/// assert_eq!(out, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
/// ```
#[must_use]
pub fn ema_seeded<T: SeriesElement>(data: &[T], period: usize) -> Vec<Option<T>> {
    let n = data.len();
    if is_degenerate(period, n) {
        return vec![None; n];
    }

    let alpha = ema_alpha::<T>(period);
    let seed = data[..period].iter().fold(T::zero(), |acc, &x| acc + x) / T::from_usize(period);

    let warmup = std::iter::repeat(None).take(period - 1);
    let recursion = std::iter::once(Some(seed)).chain(data[period..].iter().scan(seed, move |prev, &x| {
        *prev = (x - *prev) * alpha + *prev;
        Some(Some(*prev))
    }));

    warmup.chain(recursion).collect()
}

/// One step of Wilder's smoothing: `(prev * (period - 1) + value) / period`.
#[inline]
#[must_use]
pub fn wilder_step<T: SeriesElement>(prev: T, value: T, period: usize) -> T {
    let period_t = T::from_usize(period);
    (prev * (period_t - T::one()) + value) / period_t
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    #[test]
    fn test_ema_alpha() {
        assert_eq!(ema_alpha::<f64>(3), 0.5);
        assert!((ema_alpha::<f64>(12) - 2.0 / 13.0).abs() < 1e-15);
    }

    #[test]
    fn test_ema_seeded_known_values() {
        let out = ema_seeded(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(out, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_ema_seeded_period_one_tracks_input() {
        let data = [4.0_f64, 8.0, 2.0];
        // alpha = 1, so every value replaces the previous one
        assert_eq!(ema_seeded(&data, 1), vec![Some(4.0), Some(8.0), Some(2.0)]);
    }

    #[test]
    fn test_ema_seeded_length_and_warmup() {
        let data: Vec<f64> = (0..30).map(f64::from).collect();
        let out = ema_seeded(&data, 10);
        assert_eq!(out.len(), 30);
        assert_eq!(out.iter().take_while(|v| v.is_none()).count(), 9);
        assert!(out[9..].iter().all(Option::is_some));
    }

    #[test]
    fn test_ema_seeded_degenerate() {
        assert_eq!(ema_seeded(&[1.0_f64, 2.0], 3), vec![None, None]);
        assert_eq!(ema_seeded(&[1.0_f64, 2.0], 0), vec![None, None]);
        assert!(ema_seeded::<f64>(&[], 3).is_empty());
    }

    #[test]
    fn test_ema_seeded_constant_input() {
        let out = ema_seeded(&[7.0_f64; 8], 4);
        for v in &out[3..] {
            assert!((v.unwrap() - 7.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ema_seeded_f32() {
        let out = ema_seeded(&[1.0_f32, 2.0, 3.0, 4.0], 3);
        assert_eq!(out[2], Some(2.0));
        assert_eq!(out[3], Some(3.0));
    }

    #[test]
    fn test_wilder_step() {
        // (10 * 13 + 24) / 14 = 11
        assert!((wilder_step(10.0_f64, 24.0, 14) - 11.0).abs() < 1e-12);
        assert_eq!(wilder_step(5.0_f64, 9.0, 1), 9.0);
    }
}
