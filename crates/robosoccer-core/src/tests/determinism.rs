//! Determinism verification tests.
//!
//! These tests verify that a match is a pure function of its config:
//! - Same config and seed give identical state, events and snapshots
//! - The session RNG is the only source of variation between seeds
//! - Batch runs agree with sequential runs

use crate::config::SessionConfig;
use crate::match_runner::run_matches;
use crate::session::SimulationSession;

/// Two sessions with the same seed stay in lock-step.
#[test]
fn same_seed_same_hash_sequence() {
    let mut a = SimulationSession::standard(42);
    let mut b = SimulationSession::standard(42);

    for tick in 0..3_000 {
        let events_a = a.step().to_vec();
        let events_b = b.step().to_vec();
        assert_eq!(events_a, events_b, "events diverged at tick {tick}");
        assert_eq!(a.state_hash(), b.state_hash(), "state diverged at tick {tick}");
    }
    assert_eq!(a.score(), b.score());
}

/// Snapshots serialize identically for identical sessions.
#[test]
fn same_seed_same_snapshot_json() {
    let mut a = SimulationSession::standard(9);
    let mut b = SimulationSession::standard(9);
    a.run(1_000);
    b.run(1_000);

    assert_eq!(a.snapshot().to_json().unwrap(), b.snapshot().to_json().unwrap());
}

/// Without snap shots nothing draws from the RNG, so the seed stops mattering.
#[test]
fn rng_is_the_only_source_of_variation() {
    let config = |seed| {
        let mut config = SessionConfig::with_seed(seed);
        config.behavior.near_goal_kick_probability = 0.0;
        config
    };
    let mut a = SimulationSession::new(&config(1)).unwrap();
    let mut b = SimulationSession::new(&config(2)).unwrap();

    a.run(5_000);
    b.run(5_000);

    assert_eq!(a.pitch(), b.pitch());
}

/// A session rebuilt from a JSON round-trip of its config replays the same.
#[test]
fn json_config_replays_identically() {
    let config = SessionConfig::with_seed(123);
    let reloaded = SessionConfig::from_json(&config.to_json().unwrap()).unwrap();

    let mut a = SimulationSession::new(&config).unwrap();
    let mut b = SimulationSession::new(&reloaded).unwrap();
    a.run(2_000);
    b.run(2_000);

    assert_eq!(a.state_hash(), b.state_hash());
}

/// Parallel batch runs are independent of scheduling.
#[test]
fn batch_runs_are_repeatable() {
    let config = SessionConfig::default();
    let seeds: Vec<u64> = (0..8).collect();

    let first = run_matches(&config, &seeds, 1_000).unwrap();
    let second = run_matches(&config, &seeds, 1_000).unwrap();

    assert_eq!(first, second);
}
