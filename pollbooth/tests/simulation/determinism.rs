//! Determinism tests for precinct simulation.
//!
//! The same seed and configuration must replay the same day exactly.

use pollbooth::{Precinct, RandomProvider, SimRandomProvider, Voter};
use rand::distr::Distribution;

fn precinct() -> Precinct {
    Precinct::new("Replay", 2, 150, 2, 0.7, 0.1).expect("valid precinct")
}

#[test]
fn test_same_seed_same_voters() {
    let precinct = precinct();
    let first = precinct.simulate(0.4, 3.0, 12345).expect("simulation runs");
    let second = precinct.simulate(0.4, 3.0, 12345).expect("simulation runs");

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_different_seed_different_voters() {
    let precinct = precinct();
    let first = precinct.simulate(0.4, 3.0, 1).expect("simulation runs");
    let second = precinct.simulate(0.4, 3.0, 2).expect("simulation runs");

    assert_ne!(first, second);
}

#[test]
fn test_trials_do_not_share_state() {
    let precinct = precinct();
    let before = precinct.simulate(0.4, 3.0, 99).expect("simulation runs");
    for seed in 0..5 {
        precinct.simulate(0.9, 1.0, seed).expect("simulation runs");
    }
    let after = precinct.simulate(0.4, 3.0, 99).expect("simulation runs");

    assert_eq!(before, after);
}

/// Wraps a provider and counts the draws made through it.
struct CountingProvider {
    inner: SimRandomProvider,
    draws: usize,
}

impl RandomProvider for CountingProvider {
    fn random_ratio(&mut self) -> f64 {
        self.draws += 1;
        self.inner.random_ratio()
    }

    fn sample<T, D>(&mut self, distribution: &D) -> T
    where
        D: Distribution<T>,
    {
        self.draws += 1;
        self.inner.sample(distribution)
    }
}

#[test]
fn test_explicit_provider_matches_seeded_run() {
    let precinct = precinct();
    let mut random = CountingProvider {
        inner: SimRandomProvider::new(777),
        draws: 0,
    };

    let explicit = precinct
        .simulate_with(&mut random, 0.4, 3.0)
        .expect("simulation runs");
    let seeded = precinct.simulate(0.4, 3.0, 777).expect("simulation runs");

    assert_eq!(explicit, seeded);
    // Each generated voter draws a gap, a straight-ticket coin and possibly a duration.
    assert!(random.draws >= 2 * explicit.len());
}

#[test]
fn test_every_voter_is_assigned() {
    let voters: Vec<Voter> = precinct().simulate(0.5, 2.0, 8).expect("simulation runs");
    assert!(voters.iter().all(Voter::is_assigned));
}
