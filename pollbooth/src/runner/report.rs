//! Experiment results and text reports.
//!
//! Every report type renders through `Display`, so the binary only decides
//! which one to print.

use std::fmt;

use crate::voter::{average_wait_time, Voter};

use super::search::SplitTicketOutcome;

/// Outcome of a single trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    /// Seed the trial ran with.
    pub seed: u64,
    /// Number of voters who voted.
    pub voters: usize,
    /// Mean wait time over those voters.
    pub avg_wait_time: f64,
}

/// Aggregated results of an experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    precinct: String,
    percent_straight_ticket: f64,
    trials: Vec<TrialResult>,
    median_wait_time: f64,
}

impl ExperimentReport {
    /// Builds a report from trials in seed order.
    ///
    /// `trials` must not be empty.
    pub(crate) fn new(
        precinct: String,
        percent_straight_ticket: f64,
        trials: Vec<TrialResult>,
    ) -> Self {
        let median_wait_time = sorted_midpoint(trials.iter().map(|t| t.avg_wait_time).collect());
        Self {
            precinct,
            percent_straight_ticket,
            trials,
            median_wait_time,
        }
    }

    /// Name of the simulated precinct.
    pub fn precinct(&self) -> &str {
        &self.precinct
    }

    /// Straight-ticket share the trials ran with.
    pub fn percent_straight_ticket(&self) -> f64 {
        self.percent_straight_ticket
    }

    /// Number of trials run.
    pub fn iterations(&self) -> usize {
        self.trials.len()
    }

    /// Per-trial results, in seed order.
    pub fn trials(&self) -> &[TrialResult] {
        &self.trials
    }

    /// Seeds used for each trial.
    pub fn seeds_used(&self) -> Vec<u64> {
        self.trials.iter().map(|t| t.seed).collect()
    }

    /// Median of the per-trial average wait times.
    ///
    /// For an even number of trials this is the upper of the two middle
    /// values, i.e. the element at index `n / 2` of the sorted averages.
    pub fn median_wait_time(&self) -> f64 {
        self.median_wait_time
    }
}

/// Element at index `len / 2` of the sorted values.
fn sorted_midpoint(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.get(values.len() / 2).copied().unwrap_or(f64::NAN)
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Experiment Report: '{}' ===", self.precinct)?;
        writeln!(
            f,
            "Straight-ticket voters: {:.0}%",
            self.percent_straight_ticket * 100.0
        )?;
        writeln!(f, "Trials: {}", self.iterations())?;
        writeln!(f)?;
        writeln!(f, "{:>12} {:>8} {:>14}", "Seed", "Voters", "Avg Wait")?;
        for trial in &self.trials {
            writeln!(
                f,
                "{:>12} {:>8} {:>14.2}",
                trial.seed, trial.voters, trial.avg_wait_time
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Median Avg Wait Time: {:.2}", self.median_wait_time)?;
        Ok(())
    }
}

/// End-of-day summary of one precinct.
#[derive(Debug, Clone, Copy)]
pub struct PrecinctSummary<'a> {
    name: &'a str,
    closing_time: f64,
    voters: &'a [Voter],
}

impl<'a> PrecinctSummary<'a> {
    /// Summarises `voters`, who voted in `name` before `closing_time`.
    pub fn new(name: &'a str, closing_time: f64, voters: &'a [Voter]) -> Self {
        Self {
            name,
            closing_time,
            voters,
        }
    }

    /// Departure time of the last voter, if anybody voted.
    pub fn last_departure(&self) -> Option<f64> {
        self.voters.last().and_then(Voter::departure_time)
    }

    /// Mean wait time, if anybody voted.
    pub fn avg_wait_time(&self) -> Option<f64> {
        average_wait_time(self.voters)
    }
}

impl fmt::Display for PrecinctSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(last_departure), Some(avg_wait_time)) =
            (self.last_departure(), self.avg_wait_time())
        else {
            return writeln!(f, "Precinct '{}': No voters voted.", self.name);
        };

        let count = self.voters.len();
        let plural = if count > 1 { "s" } else { "" };
        writeln!(f, "PRECINCT '{}'", self.name)?;
        writeln!(f, "- {} voter{} voted.", count, plural)?;
        writeln!(
            f,
            "- Polls closed at {:.1} and last voter departed at {:.2}.",
            self.closing_time, last_departure
        )?;
        writeln!(f, "- Avg wait time: {:.2}", avg_wait_time)
    }
}

/// Per-voter table of arrival, duration, start and departure times.
#[derive(Debug, Clone, Copy)]
pub struct VoterTable<'a>(
    /// Voters to list, in arrival order.
    pub &'a [Voter],
);

impl fmt::Display for VoterTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>14} {:>17} {:>12} {:>16}",
            "Arrival Time", "Voting Duration", "Start Time", "Departure Time"
        )?;
        for voter in self.0 {
            writeln!(
                f,
                "{:>14.2} {:>17.2} {:>12} {:>16}",
                voter.arrival_time(),
                voter.voting_duration(),
                fmt_time(voter.start_time()),
                fmt_time(voter.departure_time())
            )?;
        }
        Ok(())
    }
}

fn fmt_time(time: Option<f64>) -> String {
    match time {
        Some(t) => format!("{:.2}", t),
        None => "-".to_string(),
    }
}

/// Result of a split-ticket search for one precinct.
#[derive(Debug, Clone, Copy)]
pub struct SplitTicketReport<'a> {
    precinct: &'a str,
    target_wait_time: f64,
    outcome: SplitTicketOutcome,
}

impl<'a> SplitTicketReport<'a> {
    /// Describes `outcome` of searching `precinct` against `target_wait_time`.
    pub fn new(precinct: &'a str, target_wait_time: f64, outcome: SplitTicketOutcome) -> Self {
        Self {
            precinct,
            target_wait_time,
            outcome,
        }
    }
}

impl fmt::Display for SplitTicketReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome.avg_wait_time {
            Some(avg_wait_time) => writeln!(
                f,
                "Precinct '{}' exceeds average waiting time of {:.2} with {:.0} percent split-ticket voters",
                self.precinct,
                avg_wait_time,
                self.outcome.percent_split_ticket * 100.0
            ),
            None => writeln!(
                f,
                "Waiting times are always below {:.2} in precinct '{}'",
                self.target_wait_time, self.precinct
            ),
        }
    }
}
