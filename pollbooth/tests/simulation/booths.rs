//! Booth allocation tests.

use pollbooth::{BoothPool, Precinct, SimulationError, Voter};

#[test]
fn test_single_booth_second_voter_waits() {
    let mut pool = BoothPool::new(1).expect("valid pool");
    let mut first = Voter::new(0.0, 5.0);
    let mut second = Voter::new(1.0, 5.0);

    pool.assign(&mut first).expect("first voter");
    pool.assign(&mut second).expect("second voter");

    assert_eq!(first.start_time(), Some(0.0));
    assert_eq!(first.departure_time(), Some(5.0));
    assert_eq!(second.start_time(), Some(5.0));
    assert_eq!(second.departure_time(), Some(10.0));
}

#[test]
fn test_voter_keeps_first_assignment() {
    let mut pool = BoothPool::new(1).expect("valid pool");
    let mut voter = Voter::new(0.0, 5.0);

    pool.assign(&mut voter).expect("first assignment");
    let second = pool.assign(&mut voter);

    assert!(matches!(second, Err(SimulationError::InvalidState(_))));
    assert_eq!(voter.start_time(), Some(0.0));
    assert_eq!(voter.departure_time(), Some(5.0));

    // The rejected assignment left the pool alone, so the next voter waits
    // only for the first departure.
    let mut next = Voter::new(1.0, 5.0);
    assert_eq!(pool.assign(&mut next), Ok(5.0));
}

#[test]
fn test_enough_booths_means_no_waiting() {
    let mut pool = BoothPool::new(5).expect("valid pool");
    for i in 0..5 {
        let mut voter = Voter::new(i as f64, 100.0);
        pool.assign(&mut voter).expect("fresh voter");
        assert_eq!(voter.start_time(), Some(voter.arrival_time()));
    }
}

#[test]
fn test_simulated_day_with_booth_per_voter_has_no_waiting() {
    let precinct = Precinct::new("Roomy", 2, 40, 40, 0.5, 0.05).expect("valid precinct");
    let voters = precinct.simulate(0.3, 4.0, 17).expect("simulation runs");

    assert!(!voters.is_empty());
    for voter in &voters {
        assert_eq!(voter.wait_time(), Some(0.0));
    }
}

#[test]
fn test_no_overlap_beyond_booth_count() {
    let num_booths = 3;
    let precinct = Precinct::new("Crowded", 2, 300, num_booths, 1.0, 0.1).expect("valid precinct");
    let voters = precinct.simulate(0.0, 1.0, 5).expect("simulation runs");

    // At every start time, at most `num_booths` voters occupy a booth.
    for voter in &voters {
        let t = voter.start_time().expect("assigned");
        let busy = voters
            .iter()
            .filter(|v| {
                let start = v.start_time().expect("assigned");
                let end = v.departure_time().expect("assigned");
                start <= t && t < end
            })
            .count();
        assert!(busy <= num_booths, "{busy} voters in {num_booths} booths at {t}");
    }
}

#[test]
fn test_voters_start_in_arrival_order_with_one_booth() {
    let precinct = Precinct::new("Queue", 1, 100, 1, 0.8, 0.2).expect("valid precinct");
    let voters = precinct.simulate(0.5, 2.0, 23).expect("simulation runs");

    for pair in voters.windows(2) {
        let previous_departure = pair[0].departure_time().expect("assigned");
        let next_start = pair[1].start_time().expect("assigned");
        assert!(next_start >= previous_departure);
    }
}
