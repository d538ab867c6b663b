//! Per-tick match events.
//!
//! A session records what happened during the last tick as a list of
//! [`MatchEvent`]s, in the order it happened. Events are telemetry only:
//! dropping them changes nothing about the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::agent::{AgentId, Team};
use crate::ball::WallContact;

/// Something notable that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchEvent {
    /// The free ball bounced off one or more field edges.
    WallBounce {
        /// Edges touched.
        walls: WallContact,
    },
    /// An agent kicked the ball it was holding.
    Kick {
        /// Kicker.
        agent: AgentId,
        /// Velocity given to the ball.
        velocity: Vec2,
    },
    /// An agent caught the free ball in its dribbler.
    Capture {
        /// New owner.
        agent: AgentId,
    },
    /// An agent's body shoved the free ball.
    BallPushed {
        /// Agent that hit the ball.
        agent: AgentId,
    },
    /// A goal was scored and positions were reset.
    Goal {
        /// Team credited.
        team: Team,
        /// Agent that carried the ball in; `None` for a free-ball goal.
        scorer: Option<AgentId>,
    },
    /// Two overlapping agents were pushed apart.
    AgentContact {
        /// Lower id of the pair.
        first: AgentId,
        /// Higher id of the pair.
        second: AgentId,
    },
}

impl MatchEvent {
    /// True for [`MatchEvent::Goal`].
    #[must_use]
    pub const fn is_goal(&self) -> bool {
        matches!(self, Self::Goal { .. })
    }
}
