//! Timed sorting and the per-representation result record.

use std::hint::black_box;
use std::mem;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use ds_core::SeriesOps;

use crate::error::{HarnessError, Result};

/// Timings of one representation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SortReport {
    /// Representation label.
    pub label: String,
    /// Number of series sorted.
    pub count: usize,
    /// Values per series (of the first element; all elements share it).
    pub length: usize,
    /// Number of timed sorts.
    pub iterations: usize,
    /// Size of one collection element in bytes.
    pub element_bytes: usize,
    /// Sum of all sort times.
    pub total_time_ms: f64,
    /// Mean sort time.
    pub avg_time_ms: f64,
    /// Fastest sort.
    pub min_time_ms: f64,
    /// Slowest sort.
    pub max_time_ms: f64,
}

impl SortReport {
    /// Relative change of the mean time against `baseline`: `0.5` means 50%
    /// slower, `-0.25` means 25% faster.
    #[must_use]
    pub fn relative_to(&self, baseline: &SortReport) -> f64 {
        if baseline.avg_time_ms > 0.0 {
            (self.avg_time_ms - baseline.avg_time_ms) / baseline.avg_time_ms
        } else {
            0.0
        }
    }
}

/// Sort copies of `input` by amplitude `iterations` times, timing only the
/// sort.
///
/// Each sorted copy is checked to be non-decreasing by amplitude.
pub fn time_sort<S>(input: &[S], label: &str, iterations: usize) -> Result<SortReport>
where
    S: SeriesOps + Clone,
{
    let mut times = Vec::with_capacity(iterations);

    for iteration in 0..iterations {
        let mut items = input.to_vec();
        let start = Instant::now();
        items.sort_unstable_by(S::amplitude_cmp);
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        black_box(&items);

        verify_sorted(&items, label)?;
        debug!(label, iteration, elapsed_ms = elapsed, "sorted");
        times.push(elapsed);
    }

    let total_time: f64 = times.iter().sum();
    let avg_time = if iterations > 0 {
        total_time / iterations as f64
    } else {
        0.0
    };
    let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    info!(label, avg_ms = avg_time, "sort timing complete");

    Ok(SortReport {
        label: label.to_string(),
        count: input.len(),
        length: input.first().map_or(0, SeriesOps::size),
        iterations,
        element_bytes: mem::size_of::<S>(),
        total_time_ms: total_time,
        avg_time_ms: avg_time,
        min_time_ms: if times.is_empty() { 0.0 } else { min_time },
        max_time_ms: if times.is_empty() { 0.0 } else { max_time },
    })
}

/// Check that `items` is non-decreasing by amplitude.
pub fn verify_sorted<S: SeriesOps>(items: &[S], label: &str) -> Result<()> {
    match items
        .windows(2)
        .position(|pair| pair[1].lt_amplitude(&pair[0]))
    {
        Some(i) => Err(HarnessError::Unsorted {
            label: label.to_string(),
            index: i + 1,
        }),
        None => Ok(()),
    }
}

/// Serialize reports as a JSON array.
pub fn reports_to_json(reports: &[SortReport], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(reports)?
    } else {
        serde_json::to_string(reports)?
    };
    Ok(json)
}
