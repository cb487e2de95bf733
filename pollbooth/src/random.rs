//! Random number generation for simulation trials.
//!
//! Every trial owns its random source. A [`SimRandomProvider`] is built from
//! the trial's seed and handed to the precinct simulator explicitly, so two
//! trials never share generator state and the same seed always replays the
//! same day.

use rand::distr::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Provider trait for the randomness a simulation consumes.
///
/// Implementations decide where the randomness comes from. The simulator
/// only ever asks for uniform ratios and samples from a distribution.
pub trait RandomProvider {
    /// Generate a random f64 in `[0.0, 1.0)`.
    fn random_ratio(&mut self) -> f64;

    /// Generate a random bool that is true with the given probability.
    ///
    /// A probability of `0.0` is never true and `1.0` is always true.
    fn random_bool(&mut self, probability: f64) -> bool {
        self.random_ratio() < probability
    }

    /// Draw one value from `distribution`.
    fn sample<T, D>(&mut self, distribution: &D) -> T
    where
        D: Distribution<T>;
}

/// Deterministic random provider for a single trial.
///
/// Uses ChaCha8Rng for reproducible randomness across platforms.
#[derive(Debug, Clone)]
pub struct SimRandomProvider {
    rng: ChaCha8Rng,
    seed: u64,
    call_count: u64,
}

impl SimRandomProvider {
    /// Create a provider seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            call_count: 0,
        }
    }

    /// The seed this provider was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of values drawn since construction.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

impl RandomProvider for SimRandomProvider {
    fn random_ratio(&mut self) -> f64 {
        self.call_count += 1;
        self.rng.random()
    }

    fn sample<T, D>(&mut self, distribution: &D) -> T
    where
        D: Distribution<T>,
    {
        self.call_count += 1;
        distribution.sample(&mut self.rng)
    }
}
