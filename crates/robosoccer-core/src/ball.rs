//! The ball: free flight with damping and wall bounces, or glued to a dribbler.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentId};
use crate::constants::{BALL_DAMPING, BALL_RADIUS};
use crate::field::Field;

bitflags::bitflags! {
    /// Field edges the free ball bounced off during one [`Ball::advance`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct WallContact: u8 {
        /// `y = 0` edge.
        const TOP = 1;
        /// `y = height` edge.
        const BOTTOM = 1 << 1;
        /// `x = 0` edge (left goal line).
        const LEFT = 1 << 2;
        /// `x = width` edge (right goal line).
        const RIGHT = 1 << 3;
    }
}

/// Ball state.
///
/// `attached_to` is a non-owning index into the session's agent list. While it
/// is set the ball has no physics of its own: every [`advance`](Self::advance)
/// puts it on the owner's dribbler point with zero velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    attached_to: Option<AgentId>,
}

impl Ball {
    /// Creates a free, resting ball.
    #[must_use]
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            attached_to: None,
        }
    }

    /// Creates a resting ball of the default radius on the centre spot.
    #[must_use]
    pub fn at_center(field: &Field) -> Self {
        Self::new(field.center(), BALL_RADIUS)
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity (units per tick).
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Ball radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The agent currently dribbling the ball.
    #[must_use]
    pub fn attached_to(&self) -> Option<AgentId> {
        self.attached_to
    }

    /// True when nobody is dribbling the ball.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.attached_to.is_none()
    }

    /// Puts the ball somewhere with a given velocity. Used for scenario setup.
    pub fn place(&mut self, position: Vec2, velocity: Vec2) {
        self.position = position;
        self.velocity = velocity;
    }

    /// Advances the ball by one tick.
    ///
    /// Attached: snap to the owner's dribbler point and zero the velocity.
    /// Free: integrate, damp by [`BALL_DAMPING`], then clamp-and-reflect on
    /// each field edge. The goal mouths do not open the boundary.
    ///
    /// Returns the edges bounced off this tick (always empty when attached).
    pub fn advance(&mut self, field: &Field, agents: &[Agent]) -> WallContact {
        if let Some(owner) = self.attached_to {
            match agents.get(owner.index()) {
                Some(agent) => {
                    self.position = agent.dribbler_point();
                    self.velocity = Vec2::ZERO;
                    return WallContact::empty();
                }
                None => {
                    tracing::warn!(owner = %owner, "ball owner missing, releasing ball");
                    self.attached_to = None;
                }
            }
        }

        self.position += self.velocity;
        self.velocity *= BALL_DAMPING;
        self.bounce(field)
    }

    /// Clamp-and-reflect against the four edges.
    fn bounce(&mut self, field: &Field) -> WallContact {
        let r = self.radius;
        let mut contact = WallContact::empty();

        if self.position.y - r < 0.0 {
            self.position.y = r;
            self.velocity.y = -self.velocity.y;
            contact |= WallContact::TOP;
        }
        if self.position.y + r > field.height() {
            self.position.y = field.height() - r;
            self.velocity.y = -self.velocity.y;
            contact |= WallContact::BOTTOM;
        }
        if self.position.x - r < 0.0 {
            self.position.x = r;
            self.velocity.x = -self.velocity.x;
            contact |= WallContact::LEFT;
        }
        if self.position.x + r > field.width() {
            self.position.x = field.width() - r;
            self.velocity.x = -self.velocity.x;
            contact |= WallContact::RIGHT;
        }

        contact
    }

    /// Hands the ball to `agent`.
    ///
    /// No validation: the agent update only calls this while the ball is free,
    /// and agents update one at a time.
    pub fn attach(&mut self, agent: AgentId) {
        self.attached_to = Some(agent);
    }

    /// Frees the ball and sets its velocity (a kick).
    pub fn release(&mut self, velocity: Vec2) {
        self.attached_to = None;
        self.velocity = velocity;
    }

    /// Moves a free ball by `offset` and adds `impulse` to its velocity.
    pub(crate) fn push(&mut self, offset: Vec2, impulse: Vec2) {
        self.position += offset;
        self.velocity += impulse;
    }

    /// Centre spot, at rest, unattached.
    pub fn reset_to_center(&mut self, field: &Field) {
        self.position = field.center();
        self.velocity = Vec2::ZERO;
        self.attached_to = None;
    }
}
