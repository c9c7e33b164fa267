//! Prelude module for convenient imports.

pub use crate::handle::{Handle, NullableHandle, SwapHandle, TransferHandle};
pub use crate::policy::{MovePolicy, Nullable, Swap, Transfer};

pub use ds_core::prelude::*;
