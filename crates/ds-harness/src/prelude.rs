//! Prelude module for convenient imports.

pub use crate::collection::build_collection;
pub use crate::config::HarnessConfig;
pub use crate::error::{HarnessError, Result};
pub use crate::report::{reports_to_json, time_sort, SortReport};
pub use crate::representation::{run, run_all, Representation};
