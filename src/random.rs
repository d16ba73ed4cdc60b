//! Random number helpers.
//!
//! Every search takes an explicit `&mut R: Rng`. Seed one generator with
//! [`create_rng`] and hand it to each algorithm in turn to make a whole
//! comparison run reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns a uniformly shuffled permutation of `0..n`.
pub fn random_route<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut route: Vec<usize> = (0..n).collect();
    route.shuffle(rng);
    route
}

/// Draws two distinct positions in `0..n`, uniformly over ordered pairs.
///
/// # Panics
/// Panics if `n < 2`. Callers validate the city count first.
pub fn two_distinct<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions to pick from");
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}
