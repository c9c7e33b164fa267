//! Integer series with cached extrema.
//!
//! The [`Series`] type stores an ordered sequence of integers together with
//! its minimum and maximum, maintained incrementally as values are appended.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Index};

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeriesError};
use crate::fill::FillStrategy;
use crate::num::SeriesValue;
use crate::random;
use crate::traits::SeriesOps;

/// An ordered sequence of integers with cached minimum and maximum.
///
/// Appending a value updates the extrema by comparison in O(1); element-wise
/// accumulation recomputes them with one pass. An empty series reports
/// `T::MAX_VALUE` as its minimum and `T::MIN_VALUE` as its maximum.
///
/// With the `serde` feature a series serializes as a plain list of values
/// and recomputes its extrema when deserialized.
///
/// # Example
///
/// ```rust
/// use ds_core::Series;
///
/// let mut series = Series::from([11, 3, 7]);
/// assert_eq!(series.size(), 3);
/// assert_eq!(series.get_min(), 3);
/// assert_eq!(series.get_max(), 11);
/// assert_eq!(series.amplitude(), 8);
///
/// series.add_value(-2);
/// assert_eq!(series.get_min(), -2);
/// ```
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<T>", into = "Vec<T>", bound = "T: SeriesValue")
)]
pub struct Series<T: SeriesValue = i32> {
    values: Vec<T>,
    min_value: T,
    max_value: T,
}

impl<T: SeriesValue> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SeriesValue> Clone for Series<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            min_value: self.min_value,
            max_value: self.max_value,
        }
    }

    // Reuses the destination's buffer.
    fn clone_from(&mut self, source: &Self) {
        self.values.clone_from(&source.values);
        self.min_value = source.min_value;
        self.max_value = source.max_value;
    }
}

impl<T: SeriesValue> Series<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            min_value: T::MAX_VALUE,
            max_value: T::MIN_VALUE,
        }
    }

    /// Create an empty series with room for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(values: Vec<T>) -> Self {
        let mut series = Self {
            values,
            ..Self::new()
        };
        series.recompute_extrema();
        series
    }

    /// Returns the number of values in the series.
    #[must_use]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series contains no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value, or `T::MAX_VALUE` for an empty series.
    #[must_use]
    pub fn get_min(&self) -> T {
        self.min_value
    }

    /// Largest value, or `T::MIN_VALUE` for an empty series.
    #[must_use]
    pub fn get_max(&self) -> T {
        self.max_value
    }

    /// Difference between maximum and minimum.
    ///
    /// Wraps on overflow, which happens for empty series (the sentinel
    /// difference) and for signed series whose values span more than half the
    /// range of `T`.
    #[must_use]
    pub fn amplitude(&self) -> T {
        self.max_value.wrapping_sub(&self.min_value)
    }

    /// Smallest value, or [`SeriesError::Empty`].
    pub fn try_min(&self) -> Result<T> {
        if self.is_empty() {
            return Err(SeriesError::Empty);
        }
        Ok(self.min_value)
    }

    /// Largest value, or [`SeriesError::Empty`].
    pub fn try_max(&self) -> Result<T> {
        if self.is_empty() {
            return Err(SeriesError::Empty);
        }
        Ok(self.max_value)
    }

    /// Amplitude, or [`SeriesError::Empty`] where it would be meaningless.
    pub fn try_amplitude(&self) -> Result<T> {
        if self.is_empty() {
            return Err(SeriesError::Empty);
        }
        Ok(self.amplitude())
    }

    /// Value at `index`, or [`SeriesError::IndexOutOfBounds`].
    pub fn try_get(&self, index: usize) -> Result<T> {
        self.values
            .get(index)
            .copied()
            .ok_or(SeriesError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            })
    }

    /// Append a value and update the cached extrema.
    pub fn add_value(&mut self, value: T) -> &mut Self {
        self.values.push(value);
        self.update_extrema(value);
        self
    }

    /// Element-wise addition of `other` into `self`.
    ///
    /// `self` is first extended with zeros to the length of `other` if it is
    /// shorter; then `self[i] += other[i]` for every index of `other`. Sums
    /// wrap on overflow. `other` is left untouched.
    pub fn accumulate(&mut self, other: &Self) -> &mut Self {
        if self.values.len() < other.values.len() {
            self.values.resize(other.values.len(), T::ZERO);
        }
        for (dst, src) in self.values.iter_mut().zip(&other.values) {
            *dst = dst.wrapping_add(src);
        }
        self.recompute_extrema();
        self
    }

    /// Compare two series by amplitude only.
    ///
    /// This is the ordering used to sort collections of series. It is not
    /// consistent with `==`: series with different contents compare `Equal`
    /// whenever their amplitudes match.
    #[must_use]
    pub fn amplitude_cmp(&self, other: &Self) -> Ordering {
        self.amplitude().cmp(&other.amplitude())
    }

    /// `true` if `self` has a strictly smaller amplitude than `other`.
    #[must_use]
    pub fn lt_amplitude(&self, other: &Self) -> bool {
        self.amplitude() < other.amplitude()
    }

    /// Create a series of `count` values drawn uniformly from the full range
    /// of `T`, using the process-wide generator.
    #[must_use]
    pub fn make_random(count: usize) -> Self {
        Self::make_random_by(FillStrategy::default(), count)
    }

    /// Like [`Series::make_random`], drawing from the given generator.
    #[must_use]
    pub fn make_random_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        Self::make_random_by_with(FillStrategy::default(), rng, count)
    }

    /// Like [`Series::make_random`], building the values with `strategy`.
    #[must_use]
    pub fn make_random_by(strategy: FillStrategy, count: usize) -> Self {
        random::with_generator(|rng| Self::make_random_by_with(strategy, rng, count))
    }

    /// Like [`Series::make_random_by`], drawing from the given generator.
    #[must_use]
    pub fn make_random_by_with<R: Rng + ?Sized>(
        strategy: FillStrategy,
        rng: &mut R,
        count: usize,
    ) -> Self {
        Self::from_vec(strategy.generate(rng, count))
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Consumes the series and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    #[inline]
    fn update_extrema(&mut self, value: T) {
        self.min_value = self.min_value.min(value);
        self.max_value = self.max_value.max(value);
    }

    fn recompute_extrema(&mut self) {
        let (min_value, max_value) = self
            .values
            .iter()
            .fold((T::MAX_VALUE, T::MIN_VALUE), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        self.min_value = min_value;
        self.max_value = max_value;
    }
}

impl<T: SeriesValue> SeriesOps for Series<T> {
    type Value = T;

    fn size(&self) -> usize {
        Series::size(self)
    }

    fn get_min(&self) -> T {
        Series::get_min(self)
    }

    fn get_max(&self) -> T {
        Series::get_max(self)
    }

    fn amplitude(&self) -> T {
        Series::amplitude(self)
    }

    fn add_value(&mut self, value: T) -> &mut Self {
        Series::add_value(self, value)
    }

    fn accumulate(&mut self, other: &Self) -> &mut Self {
        Series::accumulate(self, other)
    }

    fn make_random(count: usize) -> Self {
        Series::make_random(count)
    }

    fn make_random_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        Series::make_random_with(rng, count)
    }
}

impl<T: SeriesValue> AddAssign<&Series<T>> for Series<T> {
    fn add_assign(&mut self, rhs: &Series<T>) {
        self.accumulate(rhs);
    }
}

impl<T: SeriesValue> Add<&Series<T>> for Series<T> {
    type Output = Series<T>;

    fn add(mut self, rhs: &Series<T>) -> Self::Output {
        self.accumulate(rhs);
        self
    }
}

impl<T: SeriesValue> Add<&Series<T>> for &Series<T> {
    type Output = Series<T>;

    fn add(self, rhs: &Series<T>) -> Self::Output {
        self.clone() + rhs
    }
}

impl<T: SeriesValue> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<T: SeriesValue> Extend<T> for Series<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_value(value);
        }
    }
}

impl<T: SeriesValue> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: SeriesValue> IntoIterator for Series<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T: SeriesValue> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: SeriesValue> From<Vec<T>> for Series<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: SeriesValue> From<&[T]> for Series<T> {
    fn from(values: &[T]) -> Self {
        Self::from_vec(values.to_vec())
    }
}

impl<T: SeriesValue, const N: usize> From<[T; N]> for Series<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_vec(values.into())
    }
}

impl<T: SeriesValue> From<Series<T>> for Vec<T> {
    fn from(series: Series<T>) -> Self {
        series.values
    }
}
