/// One voter's trip through the polling place.
///
/// Times are minutes since the polls opened. `start_time` and
/// `departure_time` stay unset until a [`BoothPool`](crate::BoothPool)
/// assigns the voter a booth, and are never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Voter {
    arrival_time: f64,
    voting_duration: f64,
    start_time: Option<f64>,
    departure_time: Option<f64>,
}

impl Voter {
    /// Creates a voter that has arrived but not yet voted.
    pub fn new(arrival_time: f64, voting_duration: f64) -> Self {
        Self {
            arrival_time,
            voting_duration,
            start_time: None,
            departure_time: None,
        }
    }

    /// Returns the arrival time.
    pub fn arrival_time(&self) -> f64 {
        self.arrival_time
    }

    /// Returns how long the voter occupies a booth.
    pub fn voting_duration(&self) -> f64 {
        self.voting_duration
    }

    /// Returns when the voter entered a booth, if assigned.
    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    /// Returns when the voter left the booth, if assigned.
    pub fn departure_time(&self) -> Option<f64> {
        self.departure_time
    }

    /// Returns `true` once a booth has been assigned.
    pub fn is_assigned(&self) -> bool {
        self.start_time.is_some()
    }

    /// Time spent waiting for a booth, if assigned.
    pub fn wait_time(&self) -> Option<f64> {
        self.start_time.map(|start| start - self.arrival_time)
    }

    pub(crate) fn assign(&mut self, start_time: f64) {
        self.start_time = Some(start_time);
        self.departure_time = Some(start_time + self.voting_duration);
    }
}

/// Mean wait time over assigned voters, or `None` for an empty slice.
pub fn average_wait_time(voters: &[Voter]) -> Option<f64> {
    if voters.is_empty() {
        return None;
    }
    let total: f64 = voters.iter().filter_map(Voter::wait_time).sum();
    Some(total / voters.len() as f64)
}
