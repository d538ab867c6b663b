//! The pitch: everything that changes during a match.
//!
//! A [`Pitch`] owns the field, the ball, the agents and the score. Agents are
//! stored in update order and addressed by [`AgentId`], which is simply their
//! index; the list never grows or shrinks after construction.
//!
//! # Example
//!
//! ```
//! use robosoccer_core::config::SessionConfig;
//! use glam::Vec2;
//!
//! let mut pitch = SessionConfig::default().build_pitch()?;
//! pitch.ball_mut().place(Vec2::new(50.0, 50.0), Vec2::new(3.0, 0.0));
//! pitch.reset_positions();
//! assert_eq!(pitch.ball().position(), Vec2::new(400.0, 300.0));
//! # Ok::<(), robosoccer_core::error::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentId, Team};
use crate::ball::Ball;
use crate::error::{ConfigError, Result};
use crate::field::Field;
use crate::score::Score;

/// Match state container.
///
/// Built through [`SessionConfig::build_pitch`] or by deserializing a saved
/// pitch; both guarantee that `agents[i]` carries `AgentId::new(i)`.
///
/// [`SessionConfig::build_pitch`]: crate::config::SessionConfig::build_pitch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PitchData", into = "PitchData")]
pub struct Pitch {
    field: Field,
    ball: Ball,
    agents: Vec<Agent>,
    score: Score,
}

/// Wire form of [`Pitch`], checked on the way in.
#[derive(Serialize, Deserialize)]
struct PitchData {
    field: Field,
    ball: Ball,
    agents: Vec<Agent>,
    score: Score,
}

impl TryFrom<PitchData> for Pitch {
    type Error = ConfigError;

    fn try_from(data: PitchData) -> Result<Self> {
        check_ids(&data.agents)?;
        Ok(Self {
            field: data.field,
            ball: data.ball,
            agents: data.agents,
            score: data.score,
        })
    }
}

impl From<Pitch> for PitchData {
    fn from(pitch: Pitch) -> Self {
        Self {
            field: pitch.field,
            ball: pitch.ball,
            agents: pitch.agents,
            score: pitch.score,
        }
    }
}

fn check_ids(agents: &[Agent]) -> Result<()> {
    match agents
        .iter()
        .enumerate()
        .find(|(index, agent)| agent.id().index() != *index)
    {
        Some((index, agent)) => Err(ConfigError::MisplacedAgent {
            index,
            id: agent.id().as_u32(),
        }),
        None => Ok(()),
    }
}

impl Pitch {
    /// Creates a pitch at 0 – 0. Callers number `agents` by position.
    #[must_use]
    pub(crate) fn new(field: Field, ball: Ball, agents: Vec<Agent>) -> Self {
        debug_assert!(check_ids(&agents).is_ok());
        Self {
            field,
            ball,
            agents,
            score: Score::new(),
        }
    }

    /// Field geometry.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The ball.
    #[must_use]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Mutable ball, for scenario setup.
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    /// All agents in update order.
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable agents, for scenario setup.
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Agent by id.
    #[must_use]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Mutable agent by id.
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    /// Agents of one team, in update order.
    pub fn team(&self, team: Team) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(move |agent| agent.team() == team)
    }

    /// The agent dribbling the ball, if any.
    #[must_use]
    pub fn ball_owner(&self) -> Option<&Agent> {
        self.ball.attached_to().and_then(|id| self.agent(id))
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    pub(crate) fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }

    /// Disjoint borrows for the agent update loop.
    pub(crate) fn split_mut(&mut self) -> (&Field, &mut Ball, &mut [Agent]) {
        (&self.field, &mut self.ball, &mut self.agents)
    }

    /// Ball to the centre spot, every agent to its spawn pose. Score is kept.
    pub fn reset_positions(&mut self) {
        self.ball.reset_to_center(&self.field);
        for agent in &mut self.agents {
            agent.reset_position();
        }
    }
}
