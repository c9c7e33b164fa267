//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use ds_core::prelude::*;
//!
//! let series: Series = Series::make_random(8);
//! assert_eq!(SeriesOps::size(&series), 8);
//! ```

pub use crate::error::{Result, SeriesError};
pub use crate::fill::FillStrategy;
pub use crate::num::SeriesValue;
pub use crate::series::Series;
pub use crate::traits::SeriesOps;
