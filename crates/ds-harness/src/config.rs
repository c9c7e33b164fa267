//! Benchmark harness configuration.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

/// Default number of series in a benchmark collection.
pub const DEFAULT_COUNT: usize = 100_000;

/// Default number of values per series.
pub const DEFAULT_LENGTH: usize = 100;

/// Default number of timed sorts per representation.
pub const DEFAULT_ITERATIONS: usize = 3;

/// Environment variable overriding [`HarnessConfig::count`].
pub const COUNT_ENV: &str = "SERIES_BENCH_COUNT";

/// Environment variable overriding [`HarnessConfig::length`].
pub const LENGTH_ENV: &str = "SERIES_BENCH_LENGTH";

/// Shape of a benchmark run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Number of series in the collection.
    pub count: usize,
    /// Number of values in each series.
    pub length: usize,
    /// Number of timed sorts.
    pub iterations: usize,
    /// Seed for reproducible input; `None` draws from the process-wide generator.
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            length: DEFAULT_LENGTH,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

impl HarnessConfig {
    /// Defaults, with `count` and `length` overridden from
    /// [`COUNT_ENV`] and [`LENGTH_ENV`] when set, then validated.
    pub fn from_env() -> Result<Self> {
        let config = Self::default().with_overrides(|var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `count` and `length` overrides looked up by variable name.
    ///
    /// Values must parse as integers but are not validated, so callers can
    /// layer further overrides before calling [`HarnessConfig::validate`].
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(count) = parse_override(lookup(COUNT_ENV), "count")? {
            self.count = count;
        }
        if let Some(length) = parse_override(lookup(LENGTH_ENV), "length")? {
            self.length = length;
        }
        Ok(self)
    }

    /// Check that every size is positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("count", self.count),
            ("length", self.length),
            ("iterations", self.iterations),
        ] {
            if value == 0 {
                return Err(HarnessError::invalid_config(name, value, "positive integer"));
            }
        }
        Ok(())
    }
}

fn parse_override(raw: Option<String>, name: &'static str) -> Result<Option<usize>> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| HarnessError::invalid_config(name, raw, "positive integer")),
        None => Ok(None),
    }
}
