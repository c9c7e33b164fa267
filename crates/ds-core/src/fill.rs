//! Interchangeable ways of generating the backing vector of a random series.
//!
//! Every strategy produces `count` independent uniform draws; they differ
//! only in how the vector is allocated and written, which is what the
//! `make_random_bench` benchmark compares.

use core::fmt;
use core::iter;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::SeriesValue;

/// How [`Series::make_random_by`](crate::Series::make_random_by) builds its values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FillStrategy {
    /// Reserve capacity, then push one draw at a time.
    #[default]
    Push,
    /// Allocate `count` zeros, then overwrite each slot in a loop.
    Overwrite,
    /// Collect an iterator of draws.
    Collect,
    /// Reserve capacity, then extend from a bounded iterator of draws.
    Extend,
    /// Allocate `count` zeros, then fill the slice in one call.
    FillSlice,
}

impl FillStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [FillStrategy; 5] = [
        FillStrategy::Push,
        FillStrategy::Overwrite,
        FillStrategy::Collect,
        FillStrategy::Extend,
        FillStrategy::FillSlice,
    ];

    /// Short lowercase name, used in benchmark ids.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FillStrategy::Push => "push",
            FillStrategy::Overwrite => "overwrite",
            FillStrategy::Collect => "collect",
            FillStrategy::Extend => "extend",
            FillStrategy::FillSlice => "fill_slice",
        }
    }

    /// Generate `count` uniformly distributed values.
    pub fn generate<T, R>(self, rng: &mut R, count: usize) -> Vec<T>
    where
        T: SeriesValue,
        R: Rng + ?Sized,
    {
        match self {
            FillStrategy::Push => {
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(T::sample(rng));
                }
                values
            }
            FillStrategy::Overwrite => {
                let mut values = vec![T::ZERO; count];
                for v in &mut values {
                    *v = T::sample(rng);
                }
                values
            }
            FillStrategy::Collect => (0..count).map(|_| T::sample(rng)).collect(),
            FillStrategy::Extend => {
                let mut values = Vec::with_capacity(count);
                values.extend(iter::repeat_with(|| T::sample(rng)).take(count));
                values
            }
            FillStrategy::FillSlice => {
                let mut values = vec![T::ZERO; count];
                T::fill_slice(rng, &mut values);
                values
            }
        }
    }
}

impl fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
