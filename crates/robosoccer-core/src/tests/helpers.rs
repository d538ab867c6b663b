//! Scenario builders shared by the cross-module tests.

use glam::Vec2;

use crate::agent::{Role, Team};
use crate::config::{AgentSpawn, SessionConfig};
use crate::events::MatchEvent;
use crate::session::SimulationSession;

// =============================================================================
// Logging
// =============================================================================

/// Routes `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Session Setup
// =============================================================================

/// Session with the given line-up; `tweak` may adjust anything else.
pub fn session_with(
    agents: Vec<AgentSpawn>,
    tweak: impl FnOnce(&mut SessionConfig),
) -> SimulationSession {
    let mut config = SessionConfig {
        agents,
        ..SessionConfig::default()
    };
    tweak(&mut config);
    SimulationSession::new(&config).unwrap()
}

/// A single red attacker that never takes snap shots.
pub fn lone_red_attacker(position: Vec2, heading: f32) -> SimulationSession {
    session_with(
        vec![AgentSpawn::new(Team::Red, Role::Attacker, position).with_heading(heading)],
        |config| config.behavior.near_goal_kick_probability = 0.0,
    )
}

// =============================================================================
// Stepping
// =============================================================================

/// Steps until `pred` holds for a tick's events, up to `max_ticks`.
///
/// Returns the events of the matching tick.
pub fn step_until(
    session: &mut SimulationSession,
    max_ticks: u64,
    mut pred: impl FnMut(&[MatchEvent]) -> bool,
) -> Option<Vec<MatchEvent>> {
    for _ in 0..max_ticks {
        let events = session.step();
        if pred(events) {
            return Some(events.to_vec());
        }
    }
    None
}

/// True if any event is a kick.
pub fn has_kick(events: &[MatchEvent]) -> bool {
    events.iter().any(|e| matches!(e, MatchEvent::Kick { .. }))
}

/// True if any event is a goal.
pub fn has_goal(events: &[MatchEvent]) -> bool {
    events.iter().any(MatchEvent::is_goal)
}
