//! State hashing for determinism verification.
//!
//! Two sessions built from the same config and stepped the same number of
//! times must produce the same hash. Floats are hashed by bit pattern.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::Vec2;

use crate::agent::Agent;
use crate::ball::Ball;
use crate::session::SimulationSession;

/// Compute a deterministic hash of session state.
///
/// This hash includes:
/// - Seed and tick
/// - Score
/// - Ball state and owner
/// - Every agent's pose, velocity and patrol index
#[must_use]
pub fn hash_session(session: &SimulationSession) -> u64 {
    let mut hasher = DefaultHasher::new();

    session.seed().hash(&mut hasher);
    session.tick().hash(&mut hasher);
    session.score().hash(&mut hasher);

    let pitch = session.pitch();
    hash_ball(pitch.ball(), &mut hasher);
    for agent in pitch.agents() {
        hash_agent(agent, &mut hasher);
    }

    hasher.finish()
}

fn hash_vec2<H: Hasher>(v: Vec2, hasher: &mut H) {
    v.x.to_bits().hash(hasher);
    v.y.to_bits().hash(hasher);
}

fn hash_ball<H: Hasher>(ball: &Ball, hasher: &mut H) {
    hash_vec2(ball.position(), hasher);
    hash_vec2(ball.velocity(), hasher);
    ball.attached_to().hash(hasher);
}

fn hash_agent<H: Hasher>(agent: &Agent, hasher: &mut H) {
    agent.id().hash(hasher);
    hash_vec2(agent.position(), hasher);
    agent.heading().to_bits().hash(hasher);
    hash_vec2(agent.velocity(), hasher);
    match agent.behavior().patrol() {
        Some(patrol) => {
            1u8.hash(hasher);
            patrol.target_index().hash(hasher);
        }
        None => 0u8.hash(hasher),
    }
}
