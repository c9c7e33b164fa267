//! # ds-harness
//!
//! Measures how the choice of series representation affects sorting a large
//! collection by amplitude.
//!
//! - [`HarnessConfig`] - Collection size, series length, iterations and seed
//! - [`build_collection`] - Random, perturbed input for any [`SeriesOps`](ds_core::SeriesOps) type
//! - [`time_sort`] - Timed sorts producing a [`SortReport`]
//! - [`Representation`] - The measured element types, and [`run`] to measure one
//!
//! ## Example
//!
//! ```rust
//! use ds_harness::prelude::*;
//!
//! let config = HarnessConfig {
//!     count: 50,
//!     length: 10,
//!     iterations: 1,
//!     seed: Some(7),
//! };
//! let report = run(Representation::Swap, &config).unwrap();
//! assert_eq!(report.label, "swap");
//! assert_eq!(report.count, 50);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod collection;
pub mod config;
pub mod error;
pub mod prelude;
pub mod report;
pub mod representation;

pub use collection::build_collection;
pub use config::HarnessConfig;
pub use error::{HarnessError, Result};
pub use report::{reports_to_json, time_sort, verify_sorted, SortReport};
pub use representation::{run, run_all, Representation};
