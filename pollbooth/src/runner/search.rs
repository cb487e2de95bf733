//! Wait-time experiments over a precinct.

use tracing::{debug, info};

use crate::config::PrecinctConfig;
use crate::error::SimulationResult;

use super::builder::Experiment;

/// Number of steps between all straight-ticket and all split-ticket voters.
const SPLIT_TICKET_STEPS: u32 = 10;

/// Median over `ntrials` trials of the average voter wait time.
///
/// Trials run with seeds `initial_seed`, `initial_seed + 1`, and so on, all
/// with `percent_straight_ticket` straight-ticket voters.
pub fn find_avg_wait_time(
    precinct: &PrecinctConfig,
    percent_straight_ticket: f64,
    ntrials: usize,
    initial_seed: u64,
) -> SimulationResult<f64> {
    let report = Experiment::new(precinct)
        .percent_straight_ticket(percent_straight_ticket)
        .set_iterations(ntrials)
        .set_seed(initial_seed)
        .run()?;
    Ok(report.median_wait_time())
}

/// Result of [`find_percent_split_ticket`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitTicketOutcome {
    /// Share of split-ticket voters, between 0 and 1.
    pub percent_split_ticket: f64,
    /// Median average wait at that share, or `None` if the target was never exceeded.
    pub avg_wait_time: Option<f64>,
}

/// Smallest share of split-ticket voters whose median average wait exceeds
/// `target_wait_time`.
///
/// Tries 0%, 10%, ..., 100% split-ticket voters in order and stops at the
/// first share whose wait is strictly above the target. When no share
/// qualifies the outcome is `(1.0, None)`.
pub fn find_percent_split_ticket(
    precinct: &PrecinctConfig,
    target_wait_time: f64,
    ntrials: usize,
    seed: u64,
) -> SimulationResult<SplitTicketOutcome> {
    for straight_steps in (0..=SPLIT_TICKET_STEPS).rev() {
        let percent_straight_ticket = f64::from(straight_steps) / f64::from(SPLIT_TICKET_STEPS);
        let percent_split_ticket =
            f64::from(SPLIT_TICKET_STEPS - straight_steps) / f64::from(SPLIT_TICKET_STEPS);

        let avg_wait_time = find_avg_wait_time(precinct, percent_straight_ticket, ntrials, seed)?;
        debug!(
            percent_split_ticket,
            avg_wait_time,
            target_wait_time,
            "Checked voter mix"
        );

        if avg_wait_time > target_wait_time {
            info!(
                precinct = %precinct.name,
                percent_split_ticket,
                avg_wait_time,
                "Target wait time exceeded"
            );
            return Ok(SplitTicketOutcome {
                percent_split_ticket,
                avg_wait_time: Some(avg_wait_time),
            });
        }
    }

    info!(precinct = %precinct.name, target_wait_time, "Target wait time never exceeded");
    Ok(SplitTicketOutcome {
        percent_split_ticket: 1.0,
        avg_wait_time: None,
    })
}
