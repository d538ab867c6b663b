//! Read-only views for renderers.
//!
//! A [`SessionSnapshot`] copies out everything a renderer draws: the field
//! outline and goal boxes, the ball, each agent's body, heading and dribbler,
//! and the scoreboard line. It owns its data, so it can be serialized or sent
//! to another thread while the session keeps running.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentId, Role, Team};
use crate::ball::Ball;
use crate::field::Field;
use crate::pitch::Pitch;
use crate::score::Score;

/// Ball as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    /// Centre.
    pub position: Vec2,
    /// Velocity (zero while carried).
    pub velocity: Vec2,
    /// Radius.
    pub radius: f32,
    /// Carrier, if any.
    pub attached_to: Option<AgentId>,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            position: ball.position(),
            velocity: ball.velocity(),
            radius: ball.radius(),
            attached_to: ball.attached_to(),
        }
    }
}

/// Agent as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    /// Identifier.
    pub id: AgentId,
    /// Team colour.
    pub team: Team,
    /// Policy.
    pub role: Role,
    /// Centre.
    pub position: Vec2,
    /// Heading in radians.
    pub heading: f32,
    /// Body radius.
    pub radius: f32,
    /// Where the dribbler sits.
    pub dribbler_point: Vec2,
    /// Whether this agent carries the ball.
    pub has_ball: bool,
}

impl AgentView {
    fn capture(agent: &Agent, ball: &Ball) -> Self {
        Self {
            id: agent.id(),
            team: agent.team(),
            role: agent.role(),
            position: agent.position(),
            heading: agent.heading(),
            radius: agent.radius(),
            dribbler_point: agent.dribbler_point(),
            has_ball: ball.attached_to() == Some(agent.id()),
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Completed ticks.
    pub tick: u64,
    /// Field geometry.
    pub field: Field,
    /// The ball.
    pub ball: BallView,
    /// Agents in id order.
    pub agents: Vec<AgentView>,
    /// Score.
    pub score: Score,
    /// Overlay text, e.g. `"Red: 1   Blue: 0"`.
    pub scoreboard: String,
}

impl SessionSnapshot {
    /// Copies the renderable state out of `pitch`.
    #[must_use]
    pub fn capture(pitch: &Pitch, tick: u64) -> Self {
        let ball = pitch.ball();
        Self {
            tick,
            field: *pitch.field(),
            ball: BallView::from(ball),
            agents: pitch
                .agents()
                .iter()
                .map(|agent| AgentView::capture(agent, ball))
                .collect(),
            score: pitch.score(),
            scoreboard: pitch.score().scoreboard(),
        }
    }

    /// Serializes to compact JSON.
    ///
    /// # Errors
    ///
    /// Only if serialization itself fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
