//! Numeric type abstractions for series values.
//!
//! This module defines the [`SeriesValue`] trait which abstracts over the
//! primitive integer types a [`Series`](crate::Series) can store.

use core::fmt::Debug;

use num_traits::{PrimInt, WrappingAdd, WrappingSub};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Serialization bounds, present only with the `serde` feature.
#[cfg(feature = "serde")]
pub trait SerdeValue: Serialize + DeserializeOwned {}

/// Serialization bounds, present only with the `serde` feature.
#[cfg(not(feature = "serde"))]
pub trait SerdeValue {}

#[cfg(feature = "serde")]
impl<T> SerdeValue for T where T: Serialize + DeserializeOwned {}

#[cfg(not(feature = "serde"))]
impl<T> SerdeValue for T {}

/// Trait for the integer types stored in a series.
///
/// Arithmetic used by series operations (element-wise accumulation and the
/// amplitude) wraps on overflow, so every operation stays total over the full
/// range of the type.
///
/// # Associated Constants
///
/// - `MIN_VALUE` - Smallest representable value, the empty-series maximum
/// - `MAX_VALUE` - Largest representable value, the empty-series minimum
/// - `ZERO` - Fill value used when a series is extended by accumulation
///
/// # Example
///
/// ```rust
/// use ds_core::SeriesValue;
///
/// fn spread<T: SeriesValue>(lo: T, hi: T) -> T {
///     hi.wrapping_sub(&lo)
/// }
///
/// assert_eq!(spread(3i32, 11), 8);
/// assert_eq!(spread(i32::MAX, i32::MIN), 1);
/// ```
pub trait SeriesValue:
    PrimInt + WrappingAdd + WrappingSub + Debug + Default + Send + Sync + SerdeValue + 'static
{
    /// Smallest representable value.
    const MIN_VALUE: Self;
    /// Largest representable value.
    const MAX_VALUE: Self;
    /// Zero value.
    const ZERO: Self;

    /// Draw one value uniformly from the full range of the type.
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Overwrite every element of `dest` with uniformly drawn values.
    fn fill_slice<R: Rng + ?Sized>(rng: &mut R, dest: &mut [Self]);
}

macro_rules! impl_series_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SeriesValue for $ty {
                const MIN_VALUE: Self = <$ty>::MIN;
                const MAX_VALUE: Self = <$ty>::MAX;
                const ZERO: Self = 0;

                #[inline]
                fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.gen()
                }

                #[inline]
                fn fill_slice<R: Rng + ?Sized>(rng: &mut R, dest: &mut [Self]) {
                    rng.fill(dest);
                }
            }
        )*
    };
}

impl_series_value!(i8, i16, i32, i64, u8, u16, u32, u64);
