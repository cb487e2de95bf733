use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::debug;

use crate::error::{SimulationError, SimulationResult};
use crate::voter::Voter;

/// The time at which one booth becomes free.
#[derive(Debug, Clone, Copy)]
struct FreeAt(f64);

impl PartialEq for FreeAt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FreeAt {}

impl PartialOrd for FreeAt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FreeAt {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max heap, but we want the earliest free time first
        other.0.total_cmp(&self.0)
    }
}

/// A fixed set of voting booths, tracked by when each becomes free.
///
/// Booths have no identity: the pool only remembers the multiset of
/// departure times and always hands the next voter the booth that frees up
/// first. Voters must be assigned in non-decreasing arrival order.
#[derive(Debug)]
pub struct BoothPool {
    heap: BinaryHeap<FreeAt>,
    num_booths: usize,
}

impl BoothPool {
    /// Creates a pool of `num_booths` idle booths.
    ///
    /// Returns an error when `num_booths` is zero, since nobody could vote.
    pub fn new(num_booths: usize) -> SimulationResult<Self> {
        if num_booths == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "a precinct needs at least one booth".to_string(),
            ));
        }
        Ok(Self {
            heap: BinaryHeap::with_capacity(num_booths),
            num_booths,
        })
    }

    /// Assigns `voter` to the earliest available booth and returns its start time.
    ///
    /// Sets the voter's start and departure times. While some booth has never
    /// been used the voter starts on arrival; otherwise the voter starts at
    /// the later of its arrival and the earliest departure in the pool.
    ///
    /// Fails with [`SimulationError::InvalidState`] if the voter already has
    /// a booth; the voter and the pool are left untouched.
    pub fn assign(&mut self, voter: &mut Voter) -> SimulationResult<f64> {
        if voter.is_assigned() {
            return Err(SimulationError::InvalidState(format!(
                "voter arriving at {:.2} already has a booth",
                voter.arrival_time()
            )));
        }

        let arrival = voter.arrival_time();
        let start_time = if self.heap.len() < self.num_booths {
            arrival
        } else {
            match self.heap.pop() {
                Some(FreeAt(free_at)) if free_at > arrival => free_at,
                _ => arrival,
            }
        };

        voter.assign(start_time);
        let departure = start_time + voter.voting_duration();
        self.heap.push(FreeAt(departure));

        debug!(arrival, start_time, departure, "Assigned voter to booth");
        Ok(start_time)
    }

    /// Returns the earliest time a booth frees up, if every booth is in use.
    pub fn next_free_time(&self) -> Option<f64> {
        if self.heap.len() < self.num_booths {
            None
        } else {
            self.heap.peek().map(|free_at| free_at.0)
        }
    }

    /// Number of departure times currently tracked.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no voter has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of booths in the pool.
    pub fn capacity(&self) -> usize {
        self.num_booths
    }
}
