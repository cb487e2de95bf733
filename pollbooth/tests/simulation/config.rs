//! Precincts file loading tests.

use std::io::Write;
use std::path::PathBuf;

use pollbooth::{PrecinctsFile, SimulationError};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/precincts.json")
}

#[test]
fn test_load_fixture() {
    let file = PrecinctsFile::load(fixture()).expect("fixture loads");

    assert_eq!(file.seed, 1468604453);
    assert_eq!(file.precincts.len(), 2);

    let lakeside = file.precinct("Lakeside").expect("precinct exists");
    assert_eq!(lakeside.hours_open, 13);
    assert_eq!(lakeside.max_num_voters, 500);
    assert_eq!(lakeside.num_booths, 4);
    assert_eq!(lakeside.closing_time(), 780.0);
}

#[test]
fn test_load_from_temp_file() {
    let mut tmp = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        tmp,
        r#"{{"seed": 3, "precincts": [{{
            "name": "Tmp", "hours_open": 1, "num_voters": 5, "num_booths": 2,
            "arrival_rate": 0.2, "voting_duration_rate": 0.1,
            "percent_straight_ticket": 1.0, "straight_ticket_duration": 2.0
        }}]}}"#
    )
    .expect("write config");

    let file = PrecinctsFile::load(tmp.path()).expect("config loads");
    assert_eq!(file.seed, 3);
    assert_eq!(file.precincts[0].name, "Tmp");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = PrecinctsFile::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(SimulationError::IoError(_))));
}

#[test]
fn test_invalid_precinct_rejected_on_load() {
    let mut tmp = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        tmp,
        r#"{{"precincts": [{{
            "name": "Bad", "hours_open": 1, "num_voters": 5, "num_booths": 0,
            "arrival_rate": 0.2, "voting_duration_rate": 0.1,
            "percent_straight_ticket": 0.5, "straight_ticket_duration": 2.0
        }}]}}"#
    )
    .expect("write config");

    let result = PrecinctsFile::load(tmp.path());
    assert!(matches!(
        result,
        Err(SimulationError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_unknown_precinct_lookup() {
    let file = PrecinctsFile::load(fixture()).expect("fixture loads");
    assert_eq!(
        file.precinct("Nowhere").err(),
        Some(SimulationError::UnknownPrecinct("Nowhere".to_string()))
    );
}
