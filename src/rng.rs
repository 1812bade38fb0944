//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct provides the entropy source for every
//! stochastic step of the search: candidate generation, tournament sampling,
//! crossover split points, and mutation draws. It wraps the `rand` crate's
//! `StdRng` and is passed explicitly to each operation, so a run seeded with
//! `from_seed` is fully reproducible.
//!
//! ## Example
//!
//! ```rust
//! use genseek::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let index = rng.gen_index(10);
//! assert!(index < 10);
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// search engine needs.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests, and benchmarks.
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed to use for the random number generator.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a uniform index in `0..upper`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Performs a Bernoulli trial that succeeds with the given probability.
    ///
    /// # Panics
    ///
    /// Panics if `probability` is not in `[0.0, 1.0]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Samples `amount` distinct indices from `0..upper`, without
    /// replacement, in sampling order.
    ///
    /// # Panics
    ///
    /// Panics if `amount` exceeds `upper`.
    pub fn sample_indices(&mut self, upper: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, upper, amount).into_vec()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
