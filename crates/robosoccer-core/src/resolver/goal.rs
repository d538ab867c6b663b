//! Goal detection.
//!
//! A goal is scored when the ball carrier's dribbler point reaches the
//! opponent goal line inside the goal mouth. The carried ball itself lags one
//! tick behind the dribbler and is clamped by the walls, so only the dribbler
//! point can ever cross. With [`ScoringRule::DribblerOrBall`] a free ball that
//! strikes the end wall inside the mouth counts as well.

use crate::agent::{AgentId, Team};
use crate::ball::WallContact;
use crate::config::ScoringRule;
use crate::events::MatchEvent;
use crate::pitch::Pitch;

use super::{Resolver, TickFrame};

/// Scores goals and resets positions after each one.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalResolver {
    rule: ScoringRule,
}

impl GoalResolver {
    /// Resolver applying `rule`.
    #[must_use]
    pub const fn new(rule: ScoringRule) -> Self {
        Self { rule }
    }

    /// Active scoring rule.
    #[must_use]
    pub const fn rule(&self) -> ScoringRule {
        self.rule
    }

    fn carried_goal(pitch: &Pitch) -> Option<(Team, Option<AgentId>)> {
        let carrier = pitch.ball_owner()?;
        let goal = carrier.team().attacking_goal();
        pitch
            .field()
            .is_past_goal_line(goal, carrier.dribbler_point())
            .then_some((carrier.team(), Some(carrier.id())))
    }

    fn free_ball_goal(pitch: &Pitch, frame: &TickFrame<'_>) -> Option<(Team, Option<AgentId>)> {
        if !pitch.field().in_goal_band(frame.bounce_position.y) {
            return None;
        }
        if frame.walls.contains(WallContact::RIGHT) {
            Some((Team::Red, None))
        } else if frame.walls.contains(WallContact::LEFT) {
            Some((Team::Blue, None))
        } else {
            None
        }
    }
}

impl Resolver for GoalResolver {
    fn name(&self) -> &'static str {
        "goal"
    }

    fn resolve(&self, pitch: &mut Pitch, frame: &mut TickFrame<'_>) {
        let goal = Self::carried_goal(pitch).or_else(|| match self.rule {
            ScoringRule::Dribbler => None,
            ScoringRule::DribblerOrBall => Self::free_ball_goal(pitch, frame),
        });
        let Some((team, scorer)) = goal else {
            return;
        };

        pitch.score_mut().record(team);
        pitch.reset_positions();
        frame.events.push(MatchEvent::Goal { team, scorer });

        let score = pitch.score();
        tracing::info!(
            tick = frame.tick,
            %team,
            scorer = ?scorer,
            red = score.red(),
            blue = score.blue(),
            "goal"
        );
    }
}
