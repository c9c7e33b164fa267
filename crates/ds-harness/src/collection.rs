//! Building benchmark input collections.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use ds_core::SeriesOps;

use crate::config::HarnessConfig;

/// Build `config.count` random series of `config.length` values, each
/// perturbed by adding a second random series of the same length.
///
/// With `config.seed` set the collection is reproducible; otherwise it draws
/// from the process-wide generator.
pub fn build_collection<S: SeriesOps>(config: &HarnessConfig) -> Vec<S> {
    debug!(
        count = config.count,
        length = config.length,
        seeded = config.seed.is_some(),
        "building collection"
    );
    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            populate(config.count, config.length, |len| S::make_random_with(&mut rng, len))
        }
        None => populate(config.count, config.length, S::make_random),
    }
}

fn populate<S, F>(count: usize, length: usize, mut make: F) -> Vec<S>
where
    S: SeriesOps,
    F: FnMut(usize) -> S,
{
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(make(length));
    }
    for item in &mut items {
        let noise = make(length);
        item.accumulate(&noise);
    }
    items
}
