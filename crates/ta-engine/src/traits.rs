//! Numeric traits for the indicator kernels.
//!
//! The kernels in [`crate::kernels`] work on plain slices of any float type
//! through [`SeriesElement`]. The public indicator API fixes the element type
//! to `f64`, which is what [`OhlcvPoint`](crate::series::OhlcvPoint) carries.
//!
//! # Example
//!
//! ```
//! use ta_engine::traits::SeriesElement;
//!
//! fn mean<T: SeriesElement>(data: &[T]) -> T {
//!     let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
//!     sum / T::from_usize(data.len())
//! }
//!
//! assert!((mean(&[1.0_f64, 2.0, 3.0]) - 2.0).abs() < 1e-12);
//! assert!((mean(&[1.0_f32, 2.0, 3.0]) - 2.0).abs() < 1e-6);
//! ```

use num_traits::{Float, NumCast};

/// A float type usable as an element of an indicator computation.
///
/// Extends [`num_traits::Float`] with the handful of constants the indicator
/// formulas need. Implemented for every type satisfying the bounds, which in
/// practice means `f32` and `f64`.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Converts a count or period into this type.
    ///
    /// Floats can represent every `usize` (rounding to the nearest
    /// representable value), so the NaN fallback is unreachable for `f32`
    /// and `f64`.
    #[inline]
    #[must_use]
    fn from_usize(value: usize) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Converts an `f64` parameter (multiplier, acceleration factor) into this type.
    #[inline]
    #[must_use]
    fn from_f64(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Returns the constant 2, used by the EMA smoothing factor `2 / (period + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 100, the scale of percentage oscillators.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        Self::from_usize(100)
    }

    /// Returns the constant 50, the neutral value of a bounded oscillator.
    #[inline]
    #[must_use]
    fn fifty() -> Self {
        Self::from_usize(50)
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    #[test]
    fn test_series_element_from_usize() {
        let val: f64 = SeriesElement::from_usize(42);
        assert!((val - 42.0).abs() < 1e-10);

        let val_f32: f32 = SeriesElement::from_usize(100);
        assert!((val_f32 - 100.0).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_from_f64() {
        let val: f32 = SeriesElement::from_f64(0.02);
        assert!((val - 0.02).abs() < 1e-7);
    }

    #[test]
    fn test_constants() {
        assert_eq!(<f64 as SeriesElement>::two(), 2.0);
        assert_eq!(<f64 as SeriesElement>::hundred(), 100.0);
        assert_eq!(<f64 as SeriesElement>::fifty(), 50.0);
        assert_eq!(<f32 as SeriesElement>::hundred(), 100.0);
    }

    #[test]
    fn test_ema_alpha_from_constants() {
        let alpha = f64::two() / f64::from_usize(3 + 1);
        assert_eq!(alpha, 0.5);
    }

    #[test]
    fn test_large_usize_f32() {
        let val: f32 = SeriesElement::from_usize(16_777_216);
        assert!((val - 16_777_216.0).abs() < 1.0);
    }

    #[test]
    fn test_series_element_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<f64>();
        assert_send_sync::<f32>();
    }
}
