//! The operation surface shared by series values and series handles.

use core::cmp::Ordering;

use num_traits::WrappingSub;
use rand::Rng;

use crate::num::SeriesValue;

/// Operations every series representation supports.
///
/// [`Series`](crate::Series) implements this directly; handle types forward
/// each call to the series they own. Code that only needs the surface (the
/// benchmark harness, generic tests) is written against this trait so the same
/// code measures every representation.
///
/// Every method is total: an empty or unowned series reports
/// `get_min() == MAX_VALUE` and `get_max() == MIN_VALUE`.
///
/// # Example
///
/// ```rust
/// use ds_core::prelude::*;
///
/// fn widest<S: SeriesOps>(items: &[S]) -> Option<&S> {
///     items.iter().max_by(|a, b| a.amplitude_cmp(b))
/// }
///
/// let items = vec![Series::from([6, 3, 9]), Series::from([24, 21, 22])];
/// assert_eq!(widest(&items).map(|s| s.amplitude()), Some(6));
/// ```
pub trait SeriesOps: Sized {
    /// Element type.
    type Value: SeriesValue;

    /// Number of stored values.
    fn size(&self) -> usize;

    /// Cached minimum, or `Value::MAX_VALUE` when empty.
    fn get_min(&self) -> Self::Value;

    /// Cached maximum, or `Value::MIN_VALUE` when empty.
    fn get_max(&self) -> Self::Value;

    /// `get_max() - get_min()`, wrapping on overflow.
    fn amplitude(&self) -> Self::Value {
        self.get_max().wrapping_sub(&self.get_min())
    }

    /// Append one value, updating the cached extrema.
    fn add_value(&mut self, value: Self::Value) -> &mut Self;

    /// Element-wise add `other` into `self`, zero-extending `self` as needed.
    fn accumulate(&mut self, other: &Self) -> &mut Self;

    /// Create a series of `count` uniformly distributed values.
    fn make_random(count: usize) -> Self;

    /// Like [`SeriesOps::make_random`], drawing from the given generator.
    fn make_random_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self;

    /// Compare by amplitude only.
    fn amplitude_cmp(&self, other: &Self) -> Ordering {
        self.amplitude().cmp(&other.amplitude())
    }

    /// `true` if `self` has a strictly smaller amplitude than `other`.
    fn lt_amplitude(&self, other: &Self) -> bool {
        self.amplitude() < other.amplitude()
    }
}
