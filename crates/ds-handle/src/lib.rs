//! # ds-handle
//!
//! A [`Series`](ds_core::Series) behind an owning indirection, with three
//! move contracts.
//!
//! - [`Handle`] - Owning wrapper forwarding every operation to its series
//! - [`MovePolicy`] - What a handle starts out owning and what a move leaves behind
//! - [`Swap`], [`Transfer`], [`Nullable`] - The three contracts
//!
//! The contracts differ only in the state of a moved-from handle:
//!
//! ```rust
//! use ds_handle::prelude::*;
//!
//! let mut target = SwapHandle::from([27, 20, 33, 23]);
//! let mut source = SwapHandle::from([11, 3, 7]);
//! target.assign_from(&mut source);
//! assert_eq!(target.size(), 3);
//! assert_eq!(source.size(), 4); // the target's old content
//!
//! let mut target = NullableHandle::from([27, 20, 33, 23]);
//! let mut source = NullableHandle::from([11, 3, 7]);
//! target.assign_from(&mut source);
//! assert_eq!(target.size(), 3);
//! assert_eq!(source.size(), 0);
//! assert_eq!(source.get_min(), i32::MAX);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod handle;
pub mod policy;
pub mod prelude;

pub use handle::{Handle, NullableHandle, SwapHandle, TransferHandle};
pub use policy::{MovePolicy, Nullable, Slot, Swap, Transfer};
