//! Common test utilities for data-series.
//!
//! Fixtures for the worked examples, small seeded harness configurations and
//! ordering assertions shared by the workspace-level integration tests.

#![allow(dead_code)]

use ds_core::{Series, SeriesOps};
use ds_harness::HarnessConfig;

/// First worked example: `[27, 20, 33, 23]`, amplitude 13.
pub fn first_series() -> Series {
    Series::from([27, 20, 33, 23])
}

/// Second worked example: `[11, 3, 7]`, amplitude 8.
pub fn second_series() -> Series {
    Series::from([11, 3, 7])
}

/// Element-wise sum of the two worked examples.
pub const SUM_VALUES: [i32; 4] = [38, 23, 40, 23];

/// A seeded configuration small enough for debug-mode test runs.
pub fn seeded_config(count: usize, length: usize, seed: u64) -> HarnessConfig {
    HarnessConfig {
        count,
        length,
        iterations: 1,
        seed: Some(seed),
    }
}

/// Assert `items` is non-decreasing by amplitude.
pub fn assert_sorted_by_amplitude<S: SeriesOps>(items: &[S], context: &str) {
    for (i, pair) in items.windows(2).enumerate() {
        assert!(
            !pair[1].lt_amplitude(&pair[0]),
            "{}: index {} has smaller amplitude than its predecessor",
            context,
            i + 1
        );
    }
}

/// Assert the empty-series sentinels: size 0, `min == MAX`, `max == MIN`.
pub fn assert_empty_sentinels<S: SeriesOps<Value = i32>>(item: &S, context: &str) {
    assert_eq!(item.size(), 0, "{}: size", context);
    assert_eq!(item.get_min(), i32::MAX, "{}: min sentinel", context);
    assert_eq!(item.get_max(), i32::MIN, "{}: max sentinel", context);
}
