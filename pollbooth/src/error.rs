use thiserror::Error;

/// Errors that can occur while configuring or running a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A precinct or pool was configured with values the simulation cannot use.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The simulation is in an invalid state.
    #[error("Invalid simulation state: {0}")]
    InvalidState(String),
    /// An experiment was asked to run zero trials.
    #[error("An experiment needs at least one trial")]
    NoTrials,
    /// A trial finished without a single voter, so it has no average wait.
    #[error("No voters voted in the trial seeded with {seed}")]
    NoVoters {
        /// Seed of the empty trial.
        seed: u64,
    },
    /// The requested precinct is not in the precincts file.
    #[error("Unknown precinct '{0}'")]
    UnknownPrecinct(String),
    /// An I/O error occurred while reading input.
    #[error("I/O error: {0}")]
    IoError(String),
    /// The precincts file is not valid JSON for the expected layout.
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// A type alias for `Result<T, SimulationError>`.
pub type SimulationResult<T> = Result<T, SimulationError>;

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        SimulationError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        SimulationError::ParseError(err.to_string())
    }
}
