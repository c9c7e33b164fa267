//! Process-wide random source for [`Series::make_random`](crate::Series::make_random).
//!
//! The generator is seeded from OS entropy the first time it is used and then
//! reused for the rest of the process. Reading OS entropy is slow and may
//! block when the pool runs dry, so it happens once. Callers needing
//! reproducible data pass their own generator to the `*_with` constructors
//! instead.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::SeedableRng;

static SEEDINGS: AtomicUsize = AtomicUsize::new(0);

static GENERATOR: Lazy<Mutex<StdRng>> = Lazy::new(|| {
    SEEDINGS.fetch_add(1, Ordering::Relaxed);
    Mutex::new(StdRng::from_entropy())
});

/// Run `f` with exclusive access to the process-wide generator.
///
/// The lock is held for the whole call, so a caller drawing many values pays
/// for one lock acquisition. A lock poisoned by a panicking caller is
/// recovered: the generator state cannot be left half-updated in a way that
/// matters for uniform draws.
pub fn with_generator<R>(f: impl FnOnce(&mut StdRng) -> R) -> R {
    let mut guard = GENERATOR.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Number of times the process-wide generator has been seeded.
///
/// Zero before the first draw, one afterwards.
#[must_use]
pub fn generator_seedings() -> usize {
    SEEDINGS.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::thread;

    #[test]
    fn test_seeded_once_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| with_generator(|rng| rng.gen::<u32>())))
            .collect();
        for handle in handles {
            handle.join().expect("worker panicked");
        }
        with_generator(|rng| rng.gen::<u64>());

        assert_eq!(generator_seedings(), 1);
    }

    #[test]
    fn test_successive_draws_differ() {
        let a: [u64; 4] = with_generator(|rng| rng.gen());
        let b: [u64; 4] = with_generator(|rng| rng.gen());
        assert_ne!(a, b);
    }
}
