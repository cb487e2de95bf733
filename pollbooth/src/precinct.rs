//! Single-day simulation of one precinct.
//!
//! Voters arrive as a Poisson process: gaps between arrivals are drawn from
//! an exponential distribution with the precinct's arrival rate. Each voter
//! is either a straight-ticket voter with a fixed voting duration or draws a
//! duration from an exponential distribution with the voting duration rate.
//! Arrivals stop at the voter cap or when the next voter would arrive after
//! the polls close.

use rand_distr::Exp;
use tracing::{debug, instrument};

use crate::booths::BoothPool;
use crate::config::{validate_percent_straight_ticket, PrecinctConfig, HOURS_TO_MINUTES};
use crate::error::{SimulationError, SimulationResult};
use crate::random::{RandomProvider, SimRandomProvider};
use crate::voter::Voter;

/// A precinct ready to be simulated.
#[derive(Debug, Clone)]
pub struct Precinct {
    name: String,
    hours_open: u32,
    max_num_voters: usize,
    num_booths: usize,
    arrival: Exp<f64>,
    voting_duration: Exp<f64>,
}

impl Precinct {
    /// Creates a precinct, rejecting rates or booth counts that cannot be simulated.
    pub fn new(
        name: impl Into<String>,
        hours_open: u32,
        max_num_voters: usize,
        num_booths: usize,
        arrival_rate: f64,
        voting_duration_rate: f64,
    ) -> SimulationResult<Self> {
        let name = name.into();
        if num_booths == 0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "precinct '{}': num_booths must be positive",
                name
            )));
        }
        let arrival = exponential(&name, "arrival_rate", arrival_rate)?;
        let voting_duration = exponential(&name, "voting_duration_rate", voting_duration_rate)?;

        Ok(Self {
            name,
            hours_open,
            max_num_voters,
            num_booths,
            arrival,
            voting_duration,
        })
    }

    /// Creates a precinct from its file configuration.
    pub fn from_config(config: &PrecinctConfig) -> SimulationResult<Self> {
        Self::new(
            config.name.clone(),
            config.hours_open,
            config.max_num_voters,
            config.num_booths,
            config.arrival_rate,
            config.voting_duration_rate,
        )
    }

    /// Returns the precinct name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of booths.
    pub fn num_booths(&self) -> usize {
        self.num_booths
    }

    /// Returns the voter cap.
    pub fn max_num_voters(&self) -> usize {
        self.max_num_voters
    }

    /// Minutes after opening at which the polls close.
    pub fn closing_time(&self) -> f64 {
        f64::from(self.hours_open) * HOURS_TO_MINUTES
    }

    /// Simulates a day of voting with a fresh random source seeded by `seed`.
    pub fn simulate(
        &self,
        percent_straight_ticket: f64,
        straight_ticket_duration: f64,
        seed: u64,
    ) -> SimulationResult<Vec<Voter>> {
        let mut random = SimRandomProvider::new(seed);
        let voters =
            self.simulate_with(&mut random, percent_straight_ticket, straight_ticket_duration)?;
        debug!(
            precinct = %self.name,
            seed,
            draws = random.call_count(),
            "Simulation finished"
        );
        Ok(voters)
    }

    /// Simulates a day of voting, drawing randomness from `random`.
    ///
    /// Returns the voters who voted, in arrival order, each with a booth
    /// assigned.
    #[instrument(skip(self, random), fields(precinct = %self.name))]
    pub fn simulate_with<R: RandomProvider>(
        &self,
        random: &mut R,
        percent_straight_ticket: f64,
        straight_ticket_duration: f64,
    ) -> SimulationResult<Vec<Voter>> {
        validate_percent_straight_ticket(percent_straight_ticket)?;
        if !(straight_ticket_duration.is_finite() && straight_ticket_duration >= 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "straight_ticket_duration must be non-negative, got {}",
                straight_ticket_duration
            )));
        }

        let closing_time = self.closing_time();
        let mut booths = BoothPool::new(self.num_booths)?;
        let mut voters = Vec::new();
        let mut time_elapsed = 0.0;

        for _ in 0..self.max_num_voters {
            let gap: f64 = random.sample(&self.arrival);
            let voting_duration = if random.random_bool(percent_straight_ticket) {
                straight_ticket_duration
            } else {
                random.sample(&self.voting_duration)
            };

            let arrival_time = time_elapsed + gap;
            if arrival_time > closing_time {
                debug!(arrival_time, closing_time, "Next voter arrives after closing");
                break;
            }

            let mut voter = Voter::new(arrival_time, voting_duration);
            booths.assign(&mut voter)?;
            voters.push(voter);
            time_elapsed = arrival_time;
        }

        Ok(voters)
    }
}

fn exponential(precinct: &str, field: &str, rate: f64) -> SimulationResult<Exp<f64>> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(SimulationError::InvalidConfiguration(format!(
            "precinct '{}': {} must be positive, got {}",
            precinct, field, rate
        )));
    }
    Exp::new(rate).map_err(|err| {
        SimulationError::InvalidConfiguration(format!("precinct '{}': {}", precinct, err))
    })
}
