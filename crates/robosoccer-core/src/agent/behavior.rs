//! The two fixed agent policies.
//!
//! A policy turns the current state into a [`Decision`] and nothing else. The
//! only thing it may touch is the injected RNG, which the attacker draws from
//! for its snap shot near the goal.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::steering::{angle_difference, bearing};
use super::{Agent, Role};
use crate::ball::Ball;
use crate::error::ConfigError;
use crate::session::TickContext;

/// Cyclic list of waypoints a defender paces between.
///
/// Never empty, and the target index always points into the list. Both hold
/// for deserialized patrols too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PatrolData", into = "PatrolData")]
pub struct Patrol {
    waypoints: Vec<Vec2>,
    target: usize,
}

/// Wire form of [`Patrol`], checked on the way in.
#[derive(Serialize, Deserialize)]
struct PatrolData {
    waypoints: Vec<Vec2>,
    #[serde(default)]
    target: usize,
}

impl TryFrom<PatrolData> for Patrol {
    type Error = ConfigError;

    fn try_from(data: PatrolData) -> Result<Self, Self::Error> {
        if data.target >= data.waypoints.len() {
            return Err(ConfigError::InvalidPatrol {
                target: data.target,
                len: data.waypoints.len(),
            });
        }
        Ok(Self {
            waypoints: data.waypoints,
            target: data.target,
        })
    }
}

impl From<Patrol> for PatrolData {
    fn from(patrol: Patrol) -> Self {
        Self {
            waypoints: patrol.waypoints,
            target: patrol.target,
        }
    }
}

impl Patrol {
    /// Creates a patrol heading for the first waypoint. `None` if empty.
    #[must_use]
    pub fn new(waypoints: Vec<Vec2>) -> Option<Self> {
        if waypoints.is_empty() {
            None
        } else {
            Some(Self {
                waypoints,
                target: 0,
            })
        }
    }

    /// The default two-point beat: `spread` above and below `anchor`.
    #[must_use]
    pub fn vertical(anchor: Vec2, spread: f32) -> Self {
        Self {
            waypoints: vec![
                Vec2::new(anchor.x, anchor.y - spread),
                Vec2::new(anchor.x, anchor.y + spread),
            ],
            target: 0,
        }
    }

    /// Waypoint currently being walked to.
    #[must_use]
    pub fn current(&self) -> Vec2 {
        self.waypoints
            .get(self.target)
            .or_else(|| self.waypoints.first())
            .copied()
            .unwrap_or_default()
    }

    /// Index of [`current`](Self::current); always `< waypoints().len()`.
    #[must_use]
    pub fn target_index(&self) -> usize {
        self.target
    }

    /// All waypoints in visiting order.
    #[must_use]
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// Moves on to the next waypoint, wrapping around.
    pub fn advance(&mut self) {
        self.target = (self.target + 1) % self.waypoints.len().max(1);
    }
}

/// Policy plus its per-agent state.
///
/// The variant always agrees with [`Behavior::role`]; defenders carry their
/// patrol, attackers carry nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// Chase the ball, carry it towards the opponent goal, shoot.
    Attacker,
    /// Pace a patrol route.
    Defender(Patrol),
}

impl Behavior {
    /// Tag for this behavior.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Attacker => Role::Attacker,
            Self::Defender(_) => Role::Defender,
        }
    }

    /// The patrol route, for defenders.
    #[must_use]
    pub const fn patrol(&self) -> Option<&Patrol> {
        match self {
            Self::Defender(patrol) => Some(patrol),
            Self::Attacker => None,
        }
    }
}

/// What an agent wants to do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Point to seek when no explicit turn is given.
    pub target: Vec2,
    /// Kick the ball if holding it.
    pub kick: bool,
    /// Explicit heading change; clamped to the agent's turn rate.
    pub turn: Option<f32>,
}

impl Decision {
    /// Seek `target`, no kick, no explicit turn.
    #[must_use]
    pub const fn seek(target: Vec2) -> Self {
        Self {
            target,
            kick: false,
            turn: None,
        }
    }
}

pub(super) fn decide<R: Rng + ?Sized>(
    agent: &Agent,
    ball: &Ball,
    ctx: &TickContext<'_>,
    rng: &mut R,
) -> Decision {
    match agent.behavior() {
        Behavior::Attacker => attack(agent, ball, ctx, rng),
        Behavior::Defender(patrol) => Decision::seek(patrol.current()),
    }
}

fn attack<R: Rng + ?Sized>(
    agent: &Agent,
    ball: &Ball,
    ctx: &TickContext<'_>,
    rng: &mut R,
) -> Decision {
    if ball.attached_to() != Some(agent.id()) {
        return Decision::seek(ball.position());
    }

    let params = ctx.behavior;
    let goal = ctx.field.goal_center(agent.team().attacking_goal());
    let diff = angle_difference(agent.heading(), bearing(agent.position(), goal));

    let aligned = diff.abs() < params.kick_alignment_tolerance;
    // Snap shot: only draw when close enough to matter.
    let snap_shot = agent.position().distance(goal) < params.near_goal_distance
        && rng.gen_bool(params.near_goal_kick_probability);
    let kick = aligned || snap_shot;

    let turn = if kick {
        None
    } else {
        let rate = agent.max_angular_speed();
        Some(if diff > 0.0 { rate } else { -rate })
    };

    Decision {
        target: goal,
        kick,
        turn,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::agent::{AgentBody, AgentId, Team};
    use crate::config::{BehaviorParams, PhysicsParams};
    use crate::field::Field;

    /// RNG whose `gen_bool(p)` is always true for `p > 0`.
    fn lucky() -> StepRng {
        StepRng::new(0, 0)
    }

    /// RNG whose `gen_bool(p)` is always false for `p < 1`.
    fn unlucky() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn attacker(team: Team, position: Vec2, heading: f32) -> Agent {
        Agent::new(
            AgentId::new(0),
            team,
            Behavior::Attacker,
            position,
            heading,
            AgentBody::standard(2.0),
        )
    }

    fn with_ctx<T>(f: impl FnOnce(&TickContext<'_>) -> T) -> T {
        let field = Field::default();
        let physics = PhysicsParams::default();
        let behavior = BehaviorParams::default();
        f(&TickContext {
            field: &field,
            physics: &physics,
            behavior: &behavior,
        })
    }

    #[test]
    fn patrol_rejects_empty_route() {
        assert!(Patrol::new(Vec::new()).is_none());
    }

    #[test]
    fn patrol_cycles() {
        let mut patrol = Patrol::new(vec![Vec2::ZERO, Vec2::X, Vec2::Y]).unwrap();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(patrol.target_index());
            patrol.advance();
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn patrol_json_keeps_target() {
        let mut patrol = Patrol::new(vec![Vec2::ZERO, Vec2::X]).unwrap();
        patrol.advance();

        let json = serde_json::to_string(&patrol).unwrap();
        let back: Patrol = serde_json::from_str(&json).unwrap();

        assert_eq!(back, patrol);
        assert_eq!(back.current(), Vec2::X);
    }

    #[test]
    fn patrol_json_rejects_target_past_the_end() {
        let result = serde_json::from_str::<Patrol>(r#"{"waypoints":[[0.0,0.0]],"target":5}"#);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("patrol target 5"), "{err}");
    }

    #[test]
    fn patrol_json_rejects_empty_route() {
        assert!(serde_json::from_str::<Patrol>(r#"{"waypoints":[],"target":0}"#).is_err());
        assert!(serde_json::from_str::<Patrol>(r#"{"waypoints":[]}"#).is_err());
    }

    #[test]
    fn vertical_patrol_points() {
        let patrol = Patrol::vertical(Vec2::new(200.0, 350.0), 50.0);
        assert_eq!(
            patrol.waypoints(),
            &[Vec2::new(200.0, 300.0), Vec2::new(200.0, 400.0)]
        );
    }

    #[test]
    fn role_matches_variant() {
        assert_eq!(Behavior::Attacker.role(), Role::Attacker);
        let defender = Behavior::Defender(Patrol::vertical(Vec2::ZERO, 10.0));
        assert_eq!(defender.role(), Role::Defender);
        assert!(defender.patrol().is_some());
    }

    #[test]
    fn attacker_without_ball_chases_it() {
        with_ctx(|ctx| {
            let agent = attacker(Team::Red, Vec2::new(200.0, 250.0), 0.0);
            let ball = Ball::at_center(ctx.field);

            let decision = decide(&agent, &ball, ctx, &mut lucky());

            assert_eq!(decision, Decision::seek(Vec2::new(400.0, 300.0)));
        });
    }

    #[test]
    fn aligned_carrier_shoots() {
        with_ctx(|ctx| {
            let agent = attacker(Team::Red, Vec2::new(400.0, 300.0), 0.02);
            let mut ball = Ball::at_center(ctx.field);
            ball.attach(agent.id());

            let decision = decide(&agent, &ball, ctx, &mut unlucky());

            assert!(decision.kick);
            assert_eq!(decision.turn, None);
            assert_eq!(decision.target, Vec2::new(800.0, 300.0));
        });
    }

    #[test]
    fn misaligned_carrier_turns_toward_goal() {
        with_ctx(|ctx| {
            // Facing straight down, goal is to the right: turn negative.
            let agent = attacker(Team::Red, Vec2::new(400.0, 300.0), 1.5);
            let mut ball = Ball::at_center(ctx.field);
            ball.attach(agent.id());

            let decision = decide(&agent, &ball, ctx, &mut unlucky());

            assert!(!decision.kick);
            assert_eq!(decision.turn, Some(-agent.max_angular_speed()));
        });
    }

    #[test]
    fn blue_attacks_left_goal() {
        with_ctx(|ctx| {
            let agent = attacker(Team::Blue, Vec2::new(400.0, 300.0), std::f32::consts::PI);
            let mut ball = Ball::at_center(ctx.field);
            ball.attach(agent.id());

            let decision = decide(&agent, &ball, ctx, &mut unlucky());

            assert_eq!(decision.target, Vec2::new(0.0, 300.0));
            assert!(decision.kick);
        });
    }

    #[test]
    fn snap_shot_near_goal_when_draw_succeeds() {
        with_ctx(|ctx| {
            // 100 units from goal, badly misaligned.
            let agent = attacker(Team::Red, Vec2::new(700.0, 300.0), 1.5);
            let mut ball = Ball::at_center(ctx.field);
            ball.attach(agent.id());

            assert!(decide(&agent, &ball, ctx, &mut lucky()).kick);
            assert!(!decide(&agent, &ball, ctx, &mut unlucky()).kick);
        });
    }

    #[test]
    fn no_snap_shot_far_from_goal() {
        with_ctx(|ctx| {
            let agent = attacker(Team::Red, Vec2::new(300.0, 300.0), 1.5);
            let mut ball = Ball::at_center(ctx.field);
            ball.attach(agent.id());

            assert!(!decide(&agent, &ball, ctx, &mut lucky()).kick);
        });
    }

    #[test]
    fn defender_seeks_current_waypoint_and_never_kicks() {
        with_ctx(|ctx| {
            let agent = Agent::new(
                AgentId::new(1),
                Team::Blue,
                Behavior::Defender(Patrol::vertical(Vec2::new(600.0, 350.0), 50.0)),
                Vec2::new(600.0, 350.0),
                0.0,
                AgentBody::standard(1.0),
            );
            let mut ball = Ball::at_center(ctx.field);
            ball.attach(agent.id());

            let decision = decide(&agent, &ball, ctx, &mut lucky());

            assert_eq!(decision, Decision::seek(Vec2::new(600.0, 300.0)));
        });
    }
}
