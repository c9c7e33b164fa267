//! Error types for the benchmark harness.

use thiserror::Error;

/// Result type alias for harness operations that may fail.
pub type Result<T> = core::result::Result<T, HarnessError>;

/// Errors that can occur while configuring or running a benchmark.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Invalid configuration value.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidConfig {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },

    /// Representation name not recognised.
    #[error("Unknown representation '{0}' (expected one of: value, swap, transfer, nullable)")]
    UnknownRepresentation(String),

    /// A timed sort produced out-of-order output.
    #[error("Sort of '{label}' out of order at index {index}")]
    Unsorted {
        /// Label of the benchmarked representation.
        label: String,
        /// First index whose amplitude is smaller than its predecessor's.
        index: usize,
    },

    /// Report serialization failed.
    #[error("Serialization failed")]
    Serialization(#[from] serde_json::Error),
}

impl HarnessError {
    /// Create an invalid-configuration error.
    #[must_use]
    pub fn invalid_config(
        name: &'static str,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        Self::InvalidConfig {
            name,
            value: value.to_string(),
            expected,
        }
    }
}
