//! Experiment running and reporting.
//!
//! - [`Experiment`]: repeated trials of one precinct over consecutive seeds
//! - [`find_avg_wait_time`] and [`find_percent_split_ticket`]: the wait-time
//!   experiments built on it
//! - [`report`]: text renderings of experiment and simulation results

/// Repeated-trial experiment builder.
pub mod builder;
/// Experiment results and text reports.
pub mod report;
/// Wait-time experiments.
pub mod search;

pub use builder::Experiment;
pub use report::{ExperimentReport, PrecinctSummary, SplitTicketReport, TrialResult, VoterTable};
pub use search::{find_avg_wait_time, find_percent_split_ticket, SplitTicketOutcome};
