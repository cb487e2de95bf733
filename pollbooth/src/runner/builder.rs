//! Experiment builder for running a precinct over many seeds.
//!
//! Trial `i` of an experiment seeded with `s` runs with seed `s + i`. Each
//! trial gets its own random source and booth pool, and the per-trial
//! averages are only combined once every trial has finished.

use tracing::{debug, info, instrument, warn};

use crate::config::PrecinctConfig;
use crate::error::{SimulationError, SimulationResult};
use crate::precinct::Precinct;
use crate::voter::average_wait_time;

use super::report::{ExperimentReport, TrialResult};

/// Builder for a repeated-trial experiment over one precinct.
///
/// ```ignore
/// let report = Experiment::new(&precinct)
///     .percent_straight_ticket(0.3)
///     .set_iterations(20)
///     .set_seed(1468604453)
///     .run()?;
/// println!("{report}");
/// ```
#[derive(Debug, Clone)]
pub struct Experiment<'a> {
    precinct: &'a PrecinctConfig,
    percent_straight_ticket: f64,
    iterations: usize,
    seed: u64,
}

impl<'a> Experiment<'a> {
    /// Creates an experiment using the precinct's own straight-ticket share,
    /// one iteration and seed 0.
    pub fn new(precinct: &'a PrecinctConfig) -> Self {
        Self {
            precinct,
            percent_straight_ticket: precinct.percent_straight_ticket,
            iterations: 1,
            seed: 0,
        }
    }

    /// Overrides the share of straight-ticket voters.
    pub fn percent_straight_ticket(mut self, percent: f64) -> Self {
        self.percent_straight_ticket = percent;
        self
    }

    /// Sets the number of trials.
    pub fn set_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the seed of the first trial.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Runs every trial and aggregates the results.
    ///
    /// Fails with [`SimulationError::NoTrials`] when no iterations were
    /// requested, and with [`SimulationError::NoVoters`] when a trial ends
    /// without voters since its average wait is undefined.
    #[instrument(skip(self), fields(precinct = %self.precinct.name))]
    pub fn run(&self) -> SimulationResult<ExperimentReport> {
        if self.iterations == 0 {
            return Err(SimulationError::NoTrials);
        }

        let precinct = Precinct::from_config(self.precinct)?;
        let mut trials = Vec::with_capacity(self.iterations);

        for iteration in 0..self.iterations {
            let seed = self.seed.wrapping_add(iteration as u64);
            let voters = precinct.simulate(
                self.percent_straight_ticket,
                self.precinct.straight_ticket_duration,
                seed,
            )?;

            let Some(avg_wait_time) = average_wait_time(&voters) else {
                warn!(seed, "Trial finished without voters");
                return Err(SimulationError::NoVoters { seed });
            };

            debug!(
                iteration,
                seed,
                voters = voters.len(),
                avg_wait_time,
                "Trial complete"
            );
            trials.push(TrialResult {
                seed,
                voters: voters.len(),
                avg_wait_time,
            });
        }

        let report = ExperimentReport::new(
            self.precinct.name.clone(),
            self.percent_straight_ticket,
            trials,
        );
        info!(
            iterations = self.iterations,
            percent_straight_ticket = self.percent_straight_ticket,
            median_wait_time = report.median_wait_time(),
            "Experiment complete"
        );
        Ok(report)
    }
}
