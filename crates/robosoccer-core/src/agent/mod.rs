//! Agents (robots) and their per-tick update.
//!
//! - [`AgentId`]: index of an agent within its pitch
//! - [`Team`] / [`Role`]: which goal it attacks and which policy drives it
//! - [`Behavior`]: the policy together with its state (the defender's patrol)
//! - [`Agent`]: pose, kinematic limits, dribbler geometry and spawn pose
//!
//! # Update order
//!
//! [`Agent::update`] runs six steps in a fixed order: decide, kick, turn,
//! move, patrol bookkeeping, then ball interaction. Moving happens at
//! constant speed; there is no acceleration model and agents never stop.

pub mod behavior;
pub mod steering;

use std::fmt;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use behavior::{Behavior, Decision, Patrol};

use crate::ball::Ball;
use crate::constants::{AGENT_RADIUS, DRIBBLER_RADIUS, MAX_ANGULAR_SPEED};
use crate::field::GoalSide;
use crate::session::TickContext;
use steering::{bearing, heading_vector, turn_toward};

/// Index of an agent in its pitch.
///
/// Agents are created once per session and never removed, so an id stays
/// valid for the whole session.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(u32);

impl AgentId {
    /// Wraps a raw index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Position in the agent list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team colour. Red attacks the right goal, blue the left one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Attacks towards `x = width`.
    Red,
    /// Attacks towards `x = 0`.
    Blue,
}

impl Team {
    /// Goal this team scores in.
    #[must_use]
    pub const fn attacking_goal(self) -> GoalSide {
        match self {
            Self::Red => GoalSide::Right,
            Self::Blue => GoalSide::Left,
        }
    }

    /// The other team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Blue => write!(f, "Blue"),
        }
    }
}

/// Policy tag. Fixed at construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// See [`Behavior::Attacker`].
    Attacker,
    /// See [`Behavior::Defender`].
    Defender,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attacker => write!(f, "attacker"),
            Self::Defender => write!(f, "defender"),
        }
    }
}

/// Physical characteristics of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentBody {
    /// Linear speed, applied every tick.
    pub max_speed: f32,
    /// Turn rate limit per tick.
    pub max_angular_speed: f32,
    /// Body radius.
    pub radius: f32,
    /// Distance from the centre to the dribbler point.
    pub dribbler_offset: f32,
    /// Capture radius around the dribbler point.
    pub dribbler_radius: f32,
}

impl AgentBody {
    /// Reference robot with the given linear speed.
    #[must_use]
    pub const fn standard(max_speed: f32) -> Self {
        Self {
            max_speed,
            max_angular_speed: MAX_ANGULAR_SPEED,
            radius: AGENT_RADIUS,
            dribbler_offset: AGENT_RADIUS,
            dribbler_radius: DRIBBLER_RADIUS,
        }
    }
}

/// How an agent touched the ball during its update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallContact {
    /// Ball entered the dribbler and is now attached.
    Captured,
    /// Ball was hit by the body and shoved away.
    Pushed,
}

/// Side effects of one [`Agent::update`], reported for telemetry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AgentActions {
    /// Velocity given to the ball, if the agent kicked.
    pub kick: Option<Vec2>,
    /// Contact with the free ball after moving.
    pub contact: Option<BallContact>,
}

/// A robot on the pitch.
///
/// # Example
///
/// ```
/// use robosoccer_core::agent::{Agent, AgentBody, AgentId, Behavior, Team};
/// use glam::Vec2;
///
/// let agent = Agent::new(
///     AgentId::new(0),
///     Team::Red,
///     Behavior::Attacker,
///     Vec2::new(100.0, 100.0),
///     0.0,
///     AgentBody::standard(2.0),
/// );
/// assert_eq!(agent.dribbler_point(), Vec2::new(120.0, 100.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    team: Team,
    behavior: Behavior,
    body: AgentBody,
    position: Vec2,
    heading: f32,
    velocity: Vec2,
    spawn_position: Vec2,
    spawn_heading: f32,
    /// Set after a kick when kick clearance is enabled; the agent ignores the
    /// ball until it is out of body contact.
    clearing_kick: bool,
}

impl Agent {
    /// Creates an agent whose spawn pose is its starting pose.
    #[must_use]
    pub fn new(
        id: AgentId,
        team: Team,
        behavior: Behavior,
        position: Vec2,
        heading: f32,
        body: AgentBody,
    ) -> Self {
        Self {
            id,
            team,
            behavior,
            body,
            position,
            heading,
            velocity: Vec2::ZERO,
            spawn_position: position,
            spawn_heading: heading,
            clearing_kick: false,
        }
    }

    /// Identifier.
    #[must_use]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Team.
    #[must_use]
    pub fn team(&self) -> Team {
        self.team
    }

    /// Policy tag.
    #[must_use]
    pub fn role(&self) -> Role {
        self.behavior.role()
    }

    /// Policy and its state.
    #[must_use]
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Physical characteristics.
    #[must_use]
    pub fn body(&self) -> &AgentBody {
        &self.body
    }

    /// Centre position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Heading in radians (not wrapped).
    #[must_use]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Velocity applied during the last update.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Body radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.body.radius
    }

    /// Linear speed.
    #[must_use]
    pub fn max_speed(&self) -> f32 {
        self.body.max_speed
    }

    /// Turn rate limit.
    #[must_use]
    pub fn max_angular_speed(&self) -> f32 {
        self.body.max_angular_speed
    }

    /// Pose restored by [`reset_position`](Self::reset_position).
    #[must_use]
    pub fn spawn_pose(&self) -> (Vec2, f32) {
        (self.spawn_position, self.spawn_heading)
    }

    /// Unit vector along the heading.
    #[must_use]
    pub fn facing(&self) -> Vec2 {
        heading_vector(self.heading)
    }

    /// Point in front of the agent where a dribbled ball sits.
    #[must_use]
    pub fn dribbler_point(&self) -> Vec2 {
        self.position + self.facing() * self.body.dribbler_offset
    }

    /// Whether `ball` lies strictly inside the dribbler capture zone.
    #[must_use]
    pub fn is_ball_in_dribbler(&self, ball: &Ball) -> bool {
        self.dribbler_point().distance(ball.position()) < self.body.dribbler_radius
    }

    /// Teleports the agent. Used for scenario setup; the spawn pose is kept.
    pub fn set_pose(&mut self, position: Vec2, heading: f32) {
        self.position = position;
        self.heading = heading;
    }

    /// Moves the agent without touching its heading (overlap resolution).
    pub(crate) fn displace(&mut self, offset: Vec2) {
        self.position += offset;
    }

    /// Back to the spawn pose. The patrol index is left where it was.
    pub fn reset_position(&mut self) {
        self.position = self.spawn_position;
        self.heading = self.spawn_heading;
        self.velocity = Vec2::ZERO;
        self.clearing_kick = false;
    }

    /// Runs this agent's policy. No side effects beyond drawing from `rng`.
    pub fn decide<R: Rng + ?Sized>(
        &self,
        ball: &Ball,
        ctx: &TickContext<'_>,
        rng: &mut R,
    ) -> Decision {
        behavior::decide(self, ball, ctx, rng)
    }

    /// One tick: decide, kick, turn, move, patrol, ball interaction.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        ball: &mut Ball,
        ctx: &TickContext<'_>,
        rng: &mut R,
    ) -> AgentActions {
        let decision = self.decide(ball, ctx, rng);
        let mut actions = AgentActions::default();

        if decision.kick && ball.attached_to() == Some(self.id) {
            let velocity = self.facing() * ctx.physics.kick_speed;
            ball.release(velocity);
            self.clearing_kick = ctx.physics.kick_clearance;
            actions.kick = Some(velocity);
        }

        self.heading = match decision.turn {
            Some(delta) => {
                let limit = self.body.max_angular_speed;
                self.heading + delta.clamp(-limit, limit)
            }
            None => turn_toward(
                self.heading,
                bearing(self.position, decision.target),
                self.body.max_angular_speed,
            ),
        };

        self.velocity = self.facing() * self.body.max_speed;
        self.position += self.velocity;

        if let Behavior::Defender(patrol) = &mut self.behavior {
            if self.position.distance(patrol.current()) < ctx.behavior.patrol_capture_distance {
                patrol.advance();
            }
        }

        actions.contact = self.interact_with_ball(ball, ctx);
        actions
    }

    /// Capture or shove a free ball that overlaps the body.
    fn interact_with_ball(&mut self, ball: &mut Ball, ctx: &TickContext<'_>) -> Option<BallContact> {
        let offset = ball.position() - self.position;
        let distance = offset.length();
        let contact_distance = self.body.radius + ball.radius();

        if self.clearing_kick && distance >= contact_distance {
            self.clearing_kick = false;
        }
        if !ball.is_free() || self.clearing_kick || distance >= contact_distance {
            return None;
        }

        if self.is_ball_in_dribbler(ball) {
            ball.attach(self.id);
            Some(BallContact::Captured)
        } else if distance > 0.0 {
            let normal = offset / distance;
            ball.push(
                normal * (contact_distance - distance),
                self.velocity * ctx.physics.push_transfer,
            );
            Some(BallContact::Pushed)
        } else {
            None
        }
    }
}
