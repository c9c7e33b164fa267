//! Move contracts for [`Handle`](crate::Handle).
//!
//! A Rust move is a compile-time transfer: the source binding cannot be used
//! afterwards, so there is no moved-from state to observe. A handle's move
//! is instead an explicit operation on two live handles
//! ([`Handle::take_from`](crate::Handle::take_from) and
//! [`Handle::assign_from`](crate::Handle::assign_from)), and the policy type
//! parameter decides what the source is left holding.
//!
//! | Policy | Default state | Source after a move |
//! |---|---|---|
//! | [`Swap`] | empty series | the destination's previous series |
//! | [`Transfer`] | empty series | nothing |
//! | [`Nullable`] | nothing | nothing |

use core::mem;

use ds_core::{Series, SeriesValue};

/// Storage of a handle: one boxed series, or nothing.
pub type Slot<T> = Option<Box<Series<T>>>;

/// A move contract: the default state of a handle and what a move leaves
/// behind in its source.
pub trait MovePolicy {
    /// Short lowercase name, used in logs and benchmark ids.
    const NAME: &'static str;

    /// Storage of a freshly constructed handle.
    fn initial<T: SeriesValue>() -> Slot<T>;

    /// Move-assign: give `dst` the series held by `src`.
    fn move_assign<T: SeriesValue>(dst: &mut Slot<T>, src: &mut Slot<T>);

    /// Move-construct: build new storage out of `src`.
    ///
    /// Equivalent to move-assigning into a freshly constructed handle.
    fn move_construct<T: SeriesValue>(src: &mut Slot<T>) -> Slot<T> {
        let mut dst = Self::initial();
        Self::move_assign(&mut dst, src);
        dst
    }
}

/// Moves exchange storage, so a handle never owns nothing.
///
/// The moved-from handle stays fully usable, but holds whatever the
/// destination held before: after a move-construct that is a fresh empty
/// series, after a move-assign it is the destination's old content. Forwarding
/// never needs a null check; the price is a source whose content means
/// nothing to its caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Swap;

impl MovePolicy for Swap {
    const NAME: &'static str = "swap";

    fn initial<T: SeriesValue>() -> Slot<T> {
        Some(Box::default())
    }

    fn move_assign<T: SeriesValue>(dst: &mut Slot<T>, src: &mut Slot<T>) {
        mem::swap(dst, src);
    }
}

/// Moves take the storage outright and leave the source owning nothing.
///
/// A new handle owns an empty series while a moved-from one owns nothing, so
/// there are two different representations of "empty". Every forwarding call
/// checks for the unowned state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transfer;

impl MovePolicy for Transfer {
    const NAME: &'static str = "transfer";

    fn initial<T: SeriesValue>() -> Slot<T> {
        Some(Box::default())
    }

    fn move_assign<T: SeriesValue>(dst: &mut Slot<T>, src: &mut Slot<T>) {
        *dst = src.take();
    }

    fn move_construct<T: SeriesValue>(src: &mut Slot<T>) -> Slot<T> {
        src.take()
    }
}

/// Like [`Transfer`], but a new handle also owns nothing.
///
/// The default state and the moved-from state coincide, and storage is only
/// allocated by the first mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nullable;

impl MovePolicy for Nullable {
    const NAME: &'static str = "nullable";

    fn initial<T: SeriesValue>() -> Slot<T> {
        None
    }

    fn move_assign<T: SeriesValue>(dst: &mut Slot<T>, src: &mut Slot<T>) {
        *dst = src.take();
    }

    fn move_construct<T: SeriesValue>(src: &mut Slot<T>) -> Slot<T> {
        src.take()
    }
}
