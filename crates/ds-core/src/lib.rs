//! # ds-core
//!
//! Core types and traits for the data-series workspace.
//!
//! This crate provides the value type whose representation the rest of the
//! workspace compares:
//!
//! - [`SeriesValue`] - Trait for the integer types a series stores
//! - [`Series`] - Ordered integers with cached minimum and maximum
//! - [`SeriesOps`] - Operation surface shared by series values and handles
//! - [`FillStrategy`] - Alternative ways of generating random series
//! - [`random`] - The process-wide, once-seeded random source
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use ds_core::prelude::*;
//!
//! let mut a = Series::from([27, 20, 33, 23]);
//! let b = Series::from([11, 3, 7]);
//! a += &b;
//!
//! assert_eq!(a.as_slice(), &[38, 23, 40, 23]);
//! assert_eq!(a.amplitude(), 17);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod fill;
pub mod num;
pub mod prelude;
pub mod random;
pub mod series;
pub mod traits;

// Re-export core types at crate root
pub use error::{Result, SeriesError};
pub use fill::FillStrategy;
pub use num::SeriesValue;
pub use random::generator_seedings;
pub use series::Series;
pub use traits::SeriesOps;
