//! # Pollbooth
//!
//! Deterministic simulation of voters queueing for booths at a polling place.
//!
//! A precinct opens for a fixed number of hours with a fixed number of
//! booths. Voters arrive as a Poisson process, wait for the booth that frees
//! up first, vote, and leave. The same seed always replays the same day.
//!
//! ## Core Components
//!
//! - [`Voter`]: one voter's arrival, start and departure times
//! - [`BoothPool`]: earliest-available booth allocation
//! - [`Precinct`]: one simulated day for a precinct
//! - [`Experiment`]: repeated trials over consecutive seeds
//! - [`find_avg_wait_time`] / [`find_percent_split_ticket`]: wait-time experiments
//! - [`PrecinctsFile`]: JSON precinct configuration
//!
//! ## Quick Start
//!
//! ```ignore
//! use pollbooth::{find_avg_wait_time, PrecinctsFile};
//!
//! let file = PrecinctsFile::load("precincts.json")?;
//! let precinct = &file.precincts[0];
//! let median = find_avg_wait_time(precinct, 0.5, 20, file.seed)?;
//! println!("median average wait: {median:.2}");
//! ```
//!
//! ## Randomness
//!
//! Every trial builds its own [`SimRandomProvider`] from its seed and passes
//! it down explicitly. Nothing is seeded globally, so trials do not affect
//! one another.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

/// Earliest-available booth allocation.
pub mod booths;
/// Precinct configuration files.
pub mod config;
/// Error types for simulation operations.
pub mod error;
/// Single-day precinct simulation.
pub mod precinct;
/// Trial-scoped random number generation.
pub mod random;
/// Experiment running and reporting.
pub mod runner;
/// Voter records.
pub mod voter;

pub use booths::BoothPool;
pub use config::{PrecinctConfig, PrecinctsFile, HOURS_TO_MINUTES};
pub use error::{SimulationError, SimulationResult};
pub use precinct::Precinct;
pub use random::{RandomProvider, SimRandomProvider};
pub use runner::{
    find_avg_wait_time, find_percent_split_ticket, Experiment, ExperimentReport, PrecinctSummary,
    SplitTicketOutcome, SplitTicketReport, TrialResult, VoterTable,
};
pub use voter::{average_wait_time, Voter};
