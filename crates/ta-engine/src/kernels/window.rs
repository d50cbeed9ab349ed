//! Trailing-window averages.
//!
//! Two warm-up policies live here and they are intentionally different:
//!
//! - [`rolling_mean`] and [`weighted_mean`] are *strict*: a value exists only
//!   once a full window of inputs is available.
//! - [`partial_window_mean`] works on a gappy input (`Option<T>`) and
//!   averages whatever values are present inside the window. It is the
//!   smoothing used by the stochastic oscillator.
//!
//! All functions return one output per input. A `period` of zero, or one
//! longer than the input, yields an all-`None` output rather than an error.

use crate::traits::SeriesElement;

/// Returns true if no window of `period` fits in `len` inputs.
#[inline]
pub(crate) const fn is_degenerate(period: usize, len: usize) -> bool {
    period == 0 || period > len
}

/// Strict simple moving average.
///
/// `out[i]` is the mean of `data[i + 1 - period..=i]` for `i >= period - 1`.
/// The window sum is maintained incrementally.
///
/// # Example
///
/// ```
/// use ta_engine::kernels::window::rolling_mean;
///
/// let out = rolling_mean(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3);
/// assert_eq!(out, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
/// ```
#[must_use]
pub fn rolling_mean<T: SeriesElement>(data: &[T], period: usize) -> Vec<Option<T>> {
    let n = data.len();
    let mut out = vec![None; n];
    if is_degenerate(period, n) {
        return out;
    }

    let period_t = T::from_usize(period);
    let mut sum = window_sum(&data[..period]);
    out[period - 1] = Some(sum / period_t);

    for i in period..n {
        sum = sum + data[i] - data[i - period];
        if sum.is_nan() {
            // a NaN in the running sum outlives its window; rebuild it
            sum = window_sum(&data[i + 1 - period..=i]);
        }
        out[i] = Some(sum / period_t);
    }

    out
}

#[inline]
fn window_sum<T: SeriesElement>(window: &[T]) -> T {
    window.iter().fold(T::zero(), |acc, &x| acc + x)
}

/// Strict linearly weighted moving average.
///
/// The newest value gets weight `period`, the oldest weight 1, and the sum is
/// normalized by `period * (period + 1) / 2`. Uses the O(n) rolling update:
/// sliding the window subtracts one weight unit from every retained value,
/// which is the plain window sum.
///
/// # Example
///
/// ```
/// use ta_engine::kernels::window::weighted_mean;
///
/// let out = weighted_mean(&[1.0_f64, 2.0, 3.0], 3);
/// // (1×1 + 2×2 + 3×3) / 6
/// assert!((out[2].unwrap() - 14.0 / 6.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn weighted_mean<T: SeriesElement>(data: &[T], period: usize) -> Vec<Option<T>> {
    let n = data.len();
    let mut out = vec![None; n];
    if is_degenerate(period, n) {
        return out;
    }

    let period_t = T::from_usize(period);
    let weight_sum = T::from_usize(period * (period + 1) / 2);

    let mut weighted_sum = T::zero();
    let mut simple_sum = T::zero();
    for (i, &value) in data[..period].iter().enumerate() {
        weighted_sum = weighted_sum + value * T::from_usize(i + 1);
        simple_sum = simple_sum + value;
    }
    out[period - 1] = Some(weighted_sum / weight_sum);

    for i in period..n {
        weighted_sum = weighted_sum - simple_sum + data[i] * period_t;
        simple_sum = simple_sum - data[i - period] + data[i];
        out[i] = Some(weighted_sum / weight_sum);
    }

    out
}

/// Gap-tolerant moving average.
///
/// For `i >= period - 1`, `out[i]` is the mean of the present values in
/// `data[i + 1 - period..=i]`, or `None` if the window holds no values at all.
/// Earlier indices are always `None`.
///
/// # Example
///
/// ```
/// use ta_engine::kernels::window::partial_window_mean;
///
/// let data = [None, None, Some(30.0_f64), Some(60.0)];
/// let out = partial_window_mean(&data, 3);
/// // index 2 averages only the single present value in its window
/// assert_eq!(out, vec![None, None, Some(30.0), Some(45.0)]);
/// ```
#[must_use]
pub fn partial_window_mean<T: SeriesElement>(data: &[Option<T>], period: usize) -> Vec<Option<T>> {
    let n = data.len();
    let mut out = vec![None; n];
    if is_degenerate(period, n) {
        return out;
    }

    for i in (period - 1)..n {
        let (sum, count) = data[i + 1 - period..=i]
            .iter()
            .flatten()
            .fold((T::zero(), 0usize), |(sum, count), &x| (sum + x, count + 1));
        if count > 0 {
            out[i] = Some(sum / T::from_usize(count));
        }
    }

    out
}

/// Population standard deviation over a trailing window.
///
/// `means` must be the strict [`rolling_mean`] of `data` with the same
/// `period`; the deviation is taken around those exact values and divided by
/// `period` (not `period - 1`). Each window is summed directly, which keeps
/// the result free of the cancellation error of a running sum of squares.
#[must_use]
pub fn rolling_population_stddev<T: SeriesElement>(
    data: &[T],
    means: &[Option<T>],
    period: usize,
) -> Vec<Option<T>> {
    let n = data.len().min(means.len());
    let mut out = vec![None; n];
    if is_degenerate(period, n) {
        return out;
    }

    let period_t = T::from_usize(period);
    for i in (period - 1)..n {
        if let Some(mean) = means[i] {
            let sum_sq = data[i + 1 - period..=i].iter().fold(T::zero(), |acc, &x| {
                let d = x - mean;
                acc + d * d
            });
            out[i] = Some((sum_sq / period_t).sqrt());
        }
    }

    out
}
