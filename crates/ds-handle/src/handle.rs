//! Owning single-pointer wrapper around a [`Series`].

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign};

use rand::Rng;

use ds_core::{FillStrategy, Series, SeriesOps, SeriesValue};

use crate::policy::{MovePolicy, Nullable, Slot, Swap, Transfer};

/// A series behind one level of indirection, with the move contract `P`.
///
/// Every operation forwards to the owned series. When the handle owns
/// nothing (possible under [`Transfer`] and [`Nullable`]), reads behave as
/// on an empty series and the first mutation allocates one.
///
/// Copying (`clone`, `clone_from`) is a deep copy under every policy, and a
/// handle owning nothing copies to a handle owning nothing.
///
/// # Example
///
/// ```rust
/// use ds_handle::TransferHandle;
///
/// let mut source = TransferHandle::from([11, 3, 7]);
/// let target = TransferHandle::take_from(&mut source);
///
/// assert_eq!(target.size(), 3);
/// assert_eq!(source.size(), 0);
/// assert!(!source.owns_series());
/// ```
pub struct Handle<P: MovePolicy, T: SeriesValue = i32> {
    slot: Slot<T>,
    policy: PhantomData<P>,
}

/// Handle that exchanges storage on move.
pub type SwapHandle<T = i32> = Handle<Swap, T>;

/// Handle that empties its source on move.
pub type TransferHandle<T = i32> = Handle<Transfer, T>;

/// Handle that starts out and is left owning nothing.
pub type NullableHandle<T = i32> = Handle<Nullable, T>;

impl<P: MovePolicy, T: SeriesValue> Handle<P, T> {
    /// Create a handle in the policy's default state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_slot(P::initial())
    }

    /// Create a handle owning `series`.
    #[must_use]
    pub fn from_series(series: Series<T>) -> Self {
        Self::with_slot(Some(Box::new(series)))
    }

    fn with_slot(slot: Slot<T>) -> Self {
        Self {
            slot,
            policy: PhantomData,
        }
    }

    /// Move-construct: take the series out of `source`.
    ///
    /// What `source` holds afterwards is decided by `P`.
    #[must_use]
    pub fn take_from(source: &mut Self) -> Self {
        Self::with_slot(P::move_construct(&mut source.slot))
    }

    /// Move-assign: replace this handle's series with the one in `source`.
    ///
    /// What `source` holds afterwards is decided by `P`.
    pub fn assign_from(&mut self, source: &mut Self) {
        P::move_assign(&mut self.slot, &mut source.slot);
    }

    /// Return the handle to the policy's default state.
    pub fn reset(&mut self) {
        self.slot = P::initial();
    }

    /// `true` if the handle currently owns a series.
    #[must_use]
    pub fn owns_series(&self) -> bool {
        self.slot.is_some()
    }

    /// The owned series, if any.
    #[must_use]
    pub fn as_series(&self) -> Option<&Series<T>> {
        self.slot.as_deref()
    }

    /// Consume the handle, returning the owned series, if any.
    #[must_use]
    pub fn into_series(self) -> Option<Series<T>> {
        self.slot.map(|series| *series)
    }

    /// Name of the move policy.
    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        P::NAME
    }

    // Every read goes through here: an unowned handle reads as an empty series.
    fn view<R>(&self, f: impl FnOnce(&Series<T>) -> R) -> R {
        match self.slot.as_deref() {
            Some(series) => f(series),
            None => f(&Series::new()),
        }
    }

    // Every write goes through here: an unowned handle allocates on first use.
    fn storage(&mut self) -> &mut Series<T> {
        self.slot.get_or_insert_with(Box::default)
    }

    /// Number of values, `0` when nothing is owned.
    #[must_use]
    pub fn size(&self) -> usize {
        self.view(Series::size)
    }

    /// Smallest value, `T::MAX_VALUE` when empty or nothing is owned.
    #[must_use]
    pub fn get_min(&self) -> T {
        self.view(Series::get_min)
    }

    /// Largest value, `T::MIN_VALUE` when empty or nothing is owned.
    #[must_use]
    pub fn get_max(&self) -> T {
        self.view(Series::get_max)
    }

    /// `get_max() - get_min()`, wrapping on overflow.
    #[must_use]
    pub fn amplitude(&self) -> T {
        self.view(Series::amplitude)
    }

    /// Append a value, allocating storage first if nothing is owned.
    pub fn add_value(&mut self, value: T) -> &mut Self {
        self.storage().add_value(value);
        self
    }

    /// Element-wise add `other` into this handle.
    ///
    /// A handle owning nothing on the right is a no-op; on the left, storage
    /// is allocated before adding.
    pub fn accumulate(&mut self, other: &Self) -> &mut Self {
        if let Some(rhs) = other.slot.as_deref() {
            self.storage().accumulate(rhs);
        }
        self
    }

    /// Compare by amplitude only.
    #[must_use]
    pub fn amplitude_cmp(&self, other: &Self) -> Ordering {
        self.amplitude().cmp(&other.amplitude())
    }

    /// `true` if `self` has a strictly smaller amplitude than `other`.
    #[must_use]
    pub fn lt_amplitude(&self, other: &Self) -> bool {
        self.amplitude() < other.amplitude()
    }

    /// Handle owning [`Series::make_random`]`(count)`.
    #[must_use]
    pub fn make_random(count: usize) -> Self {
        Self::from_series(Series::make_random(count))
    }

    /// Handle owning [`Series::make_random_with`]`(rng, count)`.
    #[must_use]
    pub fn make_random_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        Self::from_series(Series::make_random_with(rng, count))
    }

    /// Handle owning [`Series::make_random_by`]`(strategy, count)`.
    #[must_use]
    pub fn make_random_by(strategy: FillStrategy, count: usize) -> Self {
        Self::from_series(Series::make_random_by(strategy, count))
    }
}

impl<P: MovePolicy, T: SeriesValue> Default for Handle<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MovePolicy, T: SeriesValue> Clone for Handle<P, T> {
    fn clone(&self) -> Self {
        Self::with_slot(self.slot.clone())
    }

    // Reuses the destination's series when both sides own one.
    fn clone_from(&mut self, source: &Self) {
        self.slot.clone_from(&source.slot);
    }
}

impl<P: MovePolicy, T: SeriesValue> PartialEq for Handle<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<P: MovePolicy, T: SeriesValue> Eq for Handle<P, T> {}

impl<P: MovePolicy, T: SeriesValue> fmt::Debug for Handle<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("policy", &P::NAME)
            .field("series", &self.slot)
            .finish()
    }
}

impl<P: MovePolicy, T: SeriesValue> SeriesOps for Handle<P, T> {
    type Value = T;

    fn size(&self) -> usize {
        Handle::size(self)
    }

    fn get_min(&self) -> T {
        Handle::get_min(self)
    }

    fn get_max(&self) -> T {
        Handle::get_max(self)
    }

    fn amplitude(&self) -> T {
        Handle::amplitude(self)
    }

    fn add_value(&mut self, value: T) -> &mut Self {
        Handle::add_value(self, value)
    }

    fn accumulate(&mut self, other: &Self) -> &mut Self {
        Handle::accumulate(self, other)
    }

    fn make_random(count: usize) -> Self {
        Handle::make_random(count)
    }

    fn make_random_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        Handle::make_random_with(rng, count)
    }
}

impl<P: MovePolicy, T: SeriesValue> AddAssign<&Handle<P, T>> for Handle<P, T> {
    fn add_assign(&mut self, rhs: &Handle<P, T>) {
        self.accumulate(rhs);
    }
}

impl<P: MovePolicy, T: SeriesValue> Add<&Handle<P, T>> for Handle<P, T> {
    type Output = Handle<P, T>;

    fn add(mut self, rhs: &Handle<P, T>) -> Self::Output {
        self.accumulate(rhs);
        self
    }
}

impl<P: MovePolicy, T: SeriesValue> Add<&Handle<P, T>> for &Handle<P, T> {
    type Output = Handle<P, T>;

    fn add(self, rhs: &Handle<P, T>) -> Self::Output {
        self.clone() + rhs
    }
}

impl<P: MovePolicy, T: SeriesValue> From<Series<T>> for Handle<P, T> {
    fn from(series: Series<T>) -> Self {
        Self::from_series(series)
    }
}

impl<P: MovePolicy, T: SeriesValue> From<Vec<T>> for Handle<P, T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_series(Series::from_vec(values))
    }
}

impl<P: MovePolicy, T: SeriesValue, const N: usize> From<[T; N]> for Handle<P, T> {
    fn from(values: [T; N]) -> Self {
        Self::from_series(Series::from(values))
    }
}

impl<P: MovePolicy, T: SeriesValue> FromIterator<T> for Handle<P, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_series(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_states() {
        let swap: SwapHandle = SwapHandle::new();
        let transfer: TransferHandle = TransferHandle::new();
        let nullable: NullableHandle = NullableHandle::new();
        assert!(swap.owns_series());
        assert!(transfer.owns_series());
        assert!(!nullable.owns_series());
        assert_eq!(swap.size(), 0);
        assert_eq!(transfer.size(), 0);
        assert_eq!(nullable.size(), 0);
    }

    #[test]
    fn test_unowned_reads_match_empty_series() {
        let handle: NullableHandle = NullableHandle::new();
        let empty: Series = Series::new();
        assert_eq!(handle.get_min(), empty.get_min());
        assert_eq!(handle.get_max(), empty.get_max());
        assert_eq!(handle.amplitude(), empty.amplitude());
    }

    #[test]
    fn test_add_value_allocates_lazily() {
        let mut handle: NullableHandle = NullableHandle::new();
        handle.add_value(10);
        assert!(handle.owns_series());
        assert_eq!(handle.size(), 1);
        assert_eq!(handle.get_min(), 10);
        assert_eq!(handle.get_max(), 10);
    }

    #[test]
    fn test_accumulate_unowned_rhs_is_noop() {
        let mut lhs = NullableHandle::from([1, 2]);
        let rhs: NullableHandle = NullableHandle::new();
        lhs.accumulate(&rhs);
        assert_eq!(lhs.as_series().map(Series::as_slice), Some(&[1, 2][..]));

        let mut empty_lhs: NullableHandle = NullableHandle::new();
        empty_lhs.accumulate(&rhs);
        assert!(!empty_lhs.owns_series());
    }

    #[test]
    fn test_accumulate_into_unowned_lhs_allocates() {
        let mut lhs: TransferHandle = TransferHandle::new();
        let mut source = TransferHandle::from([5]);
        lhs.assign_from(&mut source);
        let rhs = TransferHandle::from([1, 2, 3]);
        source += &rhs;
        assert_eq!(source.as_series().map(Series::as_slice), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn test_clone_of_unowned_is_unowned() {
        let handle: NullableHandle = NullableHandle::new();
        let copy = handle.clone();
        assert!(!copy.owns_series());

        let mut target = NullableHandle::from([1, 2, 3]);
        target.clone_from(&handle);
        assert!(!target.owns_series());
    }

    #[test]
    fn test_into_series_and_debug() {
        let handle = SwapHandle::from([2, 4]);
        assert!(format!("{handle:?}").contains("swap"));
        assert_eq!(handle.policy_name(), "swap");
        let series = handle.into_series().expect("swap handle always owns");
        assert_eq!(series.as_slice(), &[2, 4]);
    }

    #[test]
    fn test_reset_restores_policy_default() {
        let mut swap = SwapHandle::from([1]);
        swap.reset();
        assert!(swap.owns_series());
        assert_eq!(swap.size(), 0);

        let mut nullable = NullableHandle::from([1]);
        nullable.reset();
        assert!(!nullable.owns_series());
    }
}
