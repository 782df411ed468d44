//! Utility functions for random number generation and helpers.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Fast RNG suitable for no_std environments.
pub type FastRng = Xoshiro256PlusPlus;

/// # Overview
///
/// Creates a fast RNG seeded from a u64 value.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::utils::rng_from_seed;
///
/// let mut rng = rng_from_seed(42);
/// ```
#[inline]
pub fn rng_from_seed(seed: u64) -> FastRng {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// # Overview
///
/// Creates a fast RNG with entropy from thread-local RNG.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::utils::rng_from_entropy;
///
/// let mut rng = rng_from_entropy();
/// ```
#[cfg(feature = "std")]
#[inline]
pub fn rng_from_entropy() -> FastRng {
    Xoshiro256PlusPlus::from_rng(&mut rand::rng())
}

/// # Overview
///
/// `n` non-overlapping streams from one seed, each 2^128 draws apart.
///
/// Used to give every output unit its own stream so learning can run in
/// parallel without depending on thread scheduling.
pub fn rng_streams(seed: u64, n: usize) -> impl Iterator<Item = FastRng> {
    let mut base = rng_from_seed(seed);
    (0..n).map(move |_| {
        let stream = base.clone();
        base.jump();
        stream
    })
}

/// # Overview
///
/// Performs a Bernoulli trial with given probability.
#[inline]
pub fn bernoulli<R: Rng>(rng: &mut R, probability: f32) -> bool {
    rng.random::<f32>() < probability
}

/// # Overview
///
/// Shuffles a slice in-place using Fisher-Yates algorithm.
#[inline]
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let len = slice.len();
    for i in (1..len).rev() {
        let j = rng.random_range(0..=i as u64) as usize;
        slice.swap(i, j);
    }
}
