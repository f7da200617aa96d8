//! # RandomNumberGenerator
//!
//! Every random decision of a run (initial shuffles, parent draws, cut points,
//! crossover and mutation coin flips) is drawn from a `RandomNumberGenerator`
//! that is passed around explicitly. Seed it with
//! [`RandomNumberGenerator::from_seed`] to make a run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use evotsp::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(7);
//! let mut b = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(a.distinct_pair(10), b.distinct_pair(10));
//! ```

use rand::{rngs::StdRng, seq::index, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the
/// genetic operators need.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    rng: StdRng,
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
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a fresh seed for a derived generator.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.gen()
    }

    /// Returns a uniform value in `[0, 1)`.
    pub fn probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns a uniform value in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is not strictly positive and finite.
    pub fn uniform(&mut self, upper: f64) -> f64 {
        self.rng.gen_range(0.0..upper)
    }

    /// Returns a uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Returns two distinct indices `(low, high)` with `low < high < len`,
    /// uniform over all unordered pairs.
    ///
    /// # Panics
    ///
    /// Panics if `len < 2`.
    pub fn distinct_pair(&mut self, len: usize) -> (usize, usize) {
        assert!(len >= 2, "need at least two positions to pick a pair");
        let first = self.rng.gen_range(0..len);
        let mut second = self.rng.gen_range(0..len - 1);
        if second >= first {
            second += 1;
        }
        (first.min(second), first.max(second))
    }

    /// Samples `amount` distinct indices from `0..len` without replacement.
    ///
    /// # Panics
    ///
    /// Panics if `amount > len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, len, amount).into_vec()
    }

    /// Shuffles `items` in place, uniformly over all orderings.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
