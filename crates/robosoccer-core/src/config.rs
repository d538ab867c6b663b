//! Session configuration.
//!
//! Everything a [`SimulationSession`](crate::session::SimulationSession) needs
//! to start: field geometry, team speeds, agent bodies, the line-up, physics
//! and behavior tuning, the scoring rule and the RNG seed. The default is the
//! reference four-robot match on an 800×600 field.
//!
//! Every section is `#[serde(default)]`, so a JSON file only has to name what
//! it changes:
//!
//! ```
//! use robosoccer_core::config::SessionConfig;
//!
//! let config = SessionConfig::from_json(r#"{ "seed": 7, "physics": { "kick_speed": 9.0 } }"#)?;
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.physics.kick_speed, 9.0);
//! assert_eq!(config.agents.len(), 4);
//! # Ok::<(), robosoccer_core::error::ConfigError>(())
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentBody, AgentId, Behavior, Patrol, Role, Team};
use crate::ball::Ball;
use crate::constants::{
    AGENT_RADIUS, BALL_RADIUS, BLUE_SPEED, DRIBBLER_RADIUS, KICK_ALIGNMENT_TOLERANCE, KICK_SPEED,
    MAX_ANGULAR_SPEED, NEAR_GOAL_DISTANCE, NEAR_GOAL_KICK_PROBABILITY, PATROL_CAPTURE_DISTANCE,
    PATROL_HALF_SPAN, PUSH_TRANSFER, RED_SPEED,
};
use crate::error::{ConfigError, Result};
use crate::field::Field;
use crate::pitch::Pitch;

// =============================================================================
// Sections
// =============================================================================

/// Linear speed per team.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSpeeds {
    /// Red agents' speed.
    pub red: f32,
    /// Blue agents' speed.
    pub blue: f32,
}

impl TeamSpeeds {
    /// Speed for `team`.
    #[must_use]
    pub const fn of(&self, team: Team) -> f32 {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
        }
    }
}

impl Default for TeamSpeeds {
    fn default() -> Self {
        Self {
            red: RED_SPEED,
            blue: BLUE_SPEED,
        }
    }
}

/// Body geometry shared by every agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentParams {
    /// Body radius; also the dribbler offset.
    pub radius: f32,
    /// Turn rate limit per tick.
    pub max_angular_speed: f32,
    /// Capture radius around the dribbler point.
    pub dribbler_radius: f32,
}

impl AgentParams {
    /// Body for an agent moving at `max_speed`.
    #[must_use]
    pub const fn body(&self, max_speed: f32) -> AgentBody {
        AgentBody {
            max_speed,
            max_angular_speed: self.max_angular_speed,
            radius: self.radius,
            dribbler_offset: self.radius,
            dribbler_radius: self.dribbler_radius,
        }
    }
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            radius: AGENT_RADIUS,
            max_angular_speed: MAX_ANGULAR_SPEED,
            dribbler_radius: DRIBBLER_RADIUS,
        }
    }
}

/// Ball physics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Ball radius.
    pub ball_radius: f32,
    /// Speed of a kicked ball.
    pub kick_speed: f32,
    /// Fraction of an agent's velocity given to a ball it bumps.
    pub push_transfer: f32,
    /// When set, a kicker ignores the ball until it has left body contact.
    pub kick_clearance: bool,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            kick_speed: KICK_SPEED,
            push_transfer: PUSH_TRANSFER,
            kick_clearance: false,
        }
    }
}

/// Policy tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorParams {
    /// Heading error (radians) under which a carrier shoots.
    pub kick_alignment_tolerance: f32,
    /// Distance to the goal centre inside which snap shots are possible.
    pub near_goal_distance: f32,
    /// Per-tick snap-shot probability.
    pub near_goal_kick_probability: f64,
    /// Distance at which a patrol waypoint counts as reached.
    pub patrol_capture_distance: f32,
    /// Half-span of the generated patrol for defenders without a route.
    pub patrol_half_span: f32,
}

impl Default for BehaviorParams {
    fn default() -> Self {
        Self {
            kick_alignment_tolerance: KICK_ALIGNMENT_TOLERANCE,
            near_goal_distance: NEAR_GOAL_DISTANCE,
            near_goal_kick_probability: NEAR_GOAL_KICK_PROBABILITY,
            patrol_capture_distance: PATROL_CAPTURE_DISTANCE,
            patrol_half_span: PATROL_HALF_SPAN,
        }
    }
}

/// What counts as a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// Only a dribbler point carried over the goal line scores.
    #[default]
    Dribbler,
    /// Additionally, a free ball hitting the end wall inside the goal mouth scores.
    DribblerOrBall,
}

/// One entry of the line-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpawn {
    /// Team.
    pub team: Team,
    /// Policy.
    pub role: Role,
    /// Starting (and reset) position.
    pub position: Vec2,
    /// Starting (and reset) heading.
    #[serde(default)]
    pub heading: f32,
    /// Defender route. `None` generates a vertical beat around `position`.
    /// Ignored for attackers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patrol: Option<Vec<Vec2>>,
}

impl AgentSpawn {
    /// Spawn facing +x without an explicit route.
    #[must_use]
    pub const fn new(team: Team, role: Role, position: Vec2) -> Self {
        Self {
            team,
            role,
            position,
            heading: 0.0,
            patrol: None,
        }
    }

    /// Sets an explicit patrol route.
    #[must_use]
    pub fn with_patrol(mut self, waypoints: Vec<Vec2>) -> Self {
        self.patrol = Some(waypoints);
        self
    }

    /// Sets the starting heading.
    #[must_use]
    pub const fn with_heading(mut self, heading: f32) -> Self {
        self.heading = heading;
        self
    }
}

/// The reference line-up: one attacker and one defender per team.
#[must_use]
pub fn default_lineup() -> Vec<AgentSpawn> {
    vec![
        AgentSpawn::new(Team::Red, Role::Attacker, Vec2::new(200.0, 250.0)),
        AgentSpawn::new(Team::Red, Role::Defender, Vec2::new(200.0, 350.0)),
        AgentSpawn::new(Team::Blue, Role::Attacker, Vec2::new(600.0, 250.0)),
        AgentSpawn::new(Team::Blue, Role::Defender, Vec2::new(600.0, 350.0)),
    ]
}

// =============================================================================
// SessionConfig
// =============================================================================

/// Full description of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for the session RNG.
    pub seed: u64,
    /// Field geometry.
    pub field: Field,
    /// Linear speed per team.
    pub speeds: TeamSpeeds,
    /// Agent body geometry.
    pub agent: AgentParams,
    /// Ball physics.
    pub physics: PhysicsParams,
    /// Policy tuning.
    pub behavior: BehaviorParams,
    /// Goal rule.
    pub scoring: ScoringRule,
    /// Line-up, in update order.
    pub agents: Vec<AgentSpawn>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            field: Field::default(),
            speeds: TeamSpeeds::default(),
            agent: AgentParams::default(),
            physics: PhysicsParams::default(),
            behavior: BehaviorParams::default(),
            scoring: ScoringRule::default(),
            agents: default_lineup(),
        }
    }
}

impl SessionConfig {
    /// Default match with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parses a (possibly partial) JSON config and validates it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] on malformed input, otherwise whatever
    /// [`validate`](Self::validate) reports.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty JSON.
    ///
    /// # Errors
    ///
    /// Only if serialization itself fails, which plain data cannot trigger.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every numeric parameter and spawn.
    ///
    /// # Errors
    ///
    /// The first problem found, as a [`ConfigError`].
    pub fn validate(&self) -> Result<()> {
        let field = &self.field;
        positive("field.width", field.width())?;
        positive("field.height", field.height())?;
        positive("field.goal_width", field.goal_width())?;
        positive("field.goal_height", field.goal_height())?;
        if field.goal_height() > field.height() {
            return Err(ConfigError::GoalTooTall {
                goal_height: field.goal_height(),
                field_height: field.height(),
            });
        }

        positive("physics.ball_radius", self.physics.ball_radius)?;
        let diameter = 2.0 * self.physics.ball_radius;
        if diameter >= field.width() || diameter >= field.height() {
            return Err(ConfigError::FieldTooSmall {
                width: field.width(),
                height: field.height(),
                ball_radius: self.physics.ball_radius,
            });
        }
        positive("physics.kick_speed", self.physics.kick_speed)?;
        finite("physics.push_transfer", self.physics.push_transfer)?;

        positive("speeds.red", self.speeds.red)?;
        positive("speeds.blue", self.speeds.blue)?;
        positive("agent.radius", self.agent.radius)?;
        positive("agent.max_angular_speed", self.agent.max_angular_speed)?;
        positive("agent.dribbler_radius", self.agent.dribbler_radius)?;

        let behavior = &self.behavior;
        positive("behavior.kick_alignment_tolerance", behavior.kick_alignment_tolerance)?;
        positive("behavior.near_goal_distance", behavior.near_goal_distance)?;
        positive("behavior.patrol_capture_distance", behavior.patrol_capture_distance)?;
        positive("behavior.patrol_half_span", behavior.patrol_half_span)?;
        let p = behavior.near_goal_kick_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::InvalidProbability {
                name: "behavior.near_goal_kick_probability",
                value: p,
            });
        }

        for (index, spawn) in self.agents.iter().enumerate() {
            if !spawn.position.is_finite() || !spawn.heading.is_finite() {
                return Err(ConfigError::InvalidSpawn { index });
            }
            if let Some(route) = &spawn.patrol {
                if spawn.role == Role::Defender && route.is_empty() {
                    return Err(ConfigError::EmptyPatrol { index });
                }
                if !route.iter().all(|point| point.is_finite()) {
                    return Err(ConfigError::InvalidSpawn { index });
                }
            }
        }

        Ok(())
    }

    /// Validates the config and builds the initial pitch.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn build_pitch(&self) -> Result<Pitch> {
        self.validate()?;
        Ok(self.assemble_pitch())
    }

    /// Builds the pitch without validating. Callers must have validated.
    pub(crate) fn assemble_pitch(&self) -> Pitch {
        let agents = self
            .agents
            .iter()
            .enumerate()
            .map(|(index, spawn)| self.build_agent(index, spawn))
            .collect();
        let ball = Ball::new(self.field.center(), self.physics.ball_radius);

        Pitch::new(self.field, ball, agents)
    }

    fn build_agent(&self, index: usize, spawn: &AgentSpawn) -> Agent {
        let generated = || Patrol::vertical(spawn.position, self.behavior.patrol_half_span);
        let behavior = match spawn.role {
            Role::Attacker => Behavior::Attacker,
            Role::Defender => Behavior::Defender(
                spawn
                    .patrol
                    .clone()
                    .and_then(Patrol::new)
                    .unwrap_or_else(generated),
            ),
        };
        // Line-ups are a handful of robots.
        #[allow(clippy::cast_possible_truncation)]
        let id = AgentId::new(index as u32);

        Agent::new(
            id,
            spawn.team,
            behavior,
            spawn.position,
            spawn.heading,
            self.agent.body(self.speeds.of(spawn.team)),
        )
    }
}

fn finite(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
