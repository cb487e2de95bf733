//! # Precinct Configuration
//!
//! Precincts are described in a JSON file holding a global seed and a list
//! of precincts:
//!
//! ```json
//! {
//!   "seed": 1468604453,
//!   "precincts": [
//!     {
//!       "name": "Downtown",
//!       "hours_open": 1,
//!       "num_voters": 10,
//!       "num_booths": 1,
//!       "arrival_rate": 0.11,
//!       "voting_duration_rate": 0.1,
//!       "percent_straight_ticket": 0.5,
//!       "straight_ticket_duration": 2.0
//!     }
//!   ]
//! }
//! ```
//!
//! | Field | Meaning | Constraint |
//! |-------|---------|------------|
//! | `hours_open` | Hours the polls stay open | none |
//! | `num_voters` | Upper bound on voters generated | none |
//! | `num_booths` | Voting booths in the precinct | `> 0` |
//! | `arrival_rate` | Rate of the exponential arrival process (voters/minute) | finite, `> 0` |
//! | `voting_duration_rate` | Rate of the exponential voting duration | finite, `> 0` |
//! | `percent_straight_ticket` | Share of straight-ticket voters | `[0, 1]` |
//! | `straight_ticket_duration` | Fixed duration for straight-ticket voters | finite, `>= 0` |

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{SimulationError, SimulationResult};

/// Minutes per hour, used to turn `hours_open` into a closing time.
pub const HOURS_TO_MINUTES: f64 = 60.0;

/// Configuration of a single precinct.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrecinctConfig {
    /// Name of the precinct.
    pub name: String,
    /// Hours the precinct remains open.
    pub hours_open: u32,
    /// Maximum number of voters that may arrive.
    #[serde(rename = "num_voters")]
    pub max_num_voters: usize,
    /// Number of voting booths.
    pub num_booths: usize,
    /// Rate at which voters arrive.
    pub arrival_rate: f64,
    /// Rate parameter of the voting duration distribution.
    pub voting_duration_rate: f64,
    /// Share of straight-ticket voters, between 0 and 1.
    pub percent_straight_ticket: f64,
    /// Voting duration of straight-ticket voters.
    pub straight_ticket_duration: f64,
}

impl PrecinctConfig {
    /// Minutes after opening at which the polls close.
    pub fn closing_time(&self) -> f64 {
        f64::from(self.hours_open) * HOURS_TO_MINUTES
    }

    /// Checks that every field holds a value the simulation can use.
    pub fn validate(&self) -> SimulationResult<()> {
        let invalid = |reason: String| {
            Err(SimulationError::InvalidConfiguration(format!(
                "precinct '{}': {}",
                self.name, reason
            )))
        };

        if self.name.trim().is_empty() {
            return invalid("name must not be empty".to_string());
        }
        if self.num_booths == 0 {
            return invalid("num_booths must be positive".to_string());
        }
        if !(self.arrival_rate.is_finite() && self.arrival_rate > 0.0) {
            return invalid(format!(
                "arrival_rate must be positive, got {}",
                self.arrival_rate
            ));
        }
        if !(self.voting_duration_rate.is_finite() && self.voting_duration_rate > 0.0) {
            return invalid(format!(
                "voting_duration_rate must be positive, got {}",
                self.voting_duration_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.percent_straight_ticket) {
            return invalid(format!(
                "percent_straight_ticket must be between 0 and 1, got {}",
                self.percent_straight_ticket
            ));
        }
        if !(self.straight_ticket_duration.is_finite() && self.straight_ticket_duration >= 0.0) {
            return invalid(format!(
                "straight_ticket_duration must be non-negative, got {}",
                self.straight_ticket_duration
            ));
        }
        Ok(())
    }
}

/// Checks that a straight-ticket share lies in `[0, 1]`.
pub fn validate_percent_straight_ticket(percent: f64) -> SimulationResult<()> {
    if (0.0..=1.0).contains(&percent) {
        Ok(())
    } else {
        Err(SimulationError::InvalidConfiguration(format!(
            "percent_straight_ticket must be between 0 and 1, got {}",
            percent
        )))
    }
}

/// Contents of a precincts file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrecinctsFile {
    /// Seed shared by every precinct simulated from this file.
    #[serde(default)]
    pub seed: u64,
    /// Precinct configurations, in file order.
    pub precincts: Vec<PrecinctConfig>,
}

impl PrecinctsFile {
    /// Reads and validates a precincts file.
    pub fn load(path: impl AsRef<Path>) -> SimulationResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let file = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            precincts = file.precincts.len(),
            seed = file.seed,
            "Loaded precincts file"
        );
        Ok(file)
    }

    /// Parses and validates precincts from a JSON string.
    pub fn from_json_str(json: &str) -> SimulationResult<Self> {
        let file: PrecinctsFile = serde_json::from_str(json)?;
        file.validate()?;
        Ok(file)
    }

    /// Validates every precinct and rejects duplicate names.
    pub fn validate(&self) -> SimulationResult<()> {
        let mut names = HashSet::new();
        for precinct in &self.precincts {
            precinct.validate()?;
            if !names.insert(precinct.name.as_str()) {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "duplicate precinct name '{}'",
                    precinct.name
                )));
            }
        }
        Ok(())
    }

    /// Looks up a precinct by name.
    pub fn precinct(&self, name: &str) -> SimulationResult<&PrecinctConfig> {
        self.precincts
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| SimulationError::UnknownPrecinct(name.to_string()))
    }

    /// Returns the named precinct, or every precinct in file order when no
    /// name is given.
    pub fn select(&self, name: Option<&str>) -> SimulationResult<Vec<&PrecinctConfig>> {
        match name {
            Some(name) => Ok(vec![self.precinct(name)?]),
            None => Ok(self.precincts.iter().collect()),
        }
    }
}
