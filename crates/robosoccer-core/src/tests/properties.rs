//! Property tests for the physical invariants.

use glam::Vec2;
use proptest::prelude::*;

use crate::agent::steering::{angle_difference, turn_toward};
use crate::agent::{Agent, AgentBody, AgentId, Behavior, Patrol, Team};
use crate::ball::Ball;
use crate::field::Field;
use crate::pitch::Pitch;
use crate::resolver::{Resolver, SeparationResolver, TickFrame};
use crate::WallContact;

fn defender(id: u32, position: Vec2) -> Agent {
    Agent::new(
        AgentId::new(id),
        Team::Red,
        Behavior::Defender(Patrol::vertical(position, 50.0)),
        position,
        0.0,
        AgentBody::standard(2.0),
    )
}

proptest! {
    /// A free ball ends every advance inside the field, wherever it started.
    #[test]
    fn free_ball_is_contained(
        x in -50.0f32..850.0,
        y in -50.0f32..650.0,
        vx in -20.0f32..20.0,
        vy in -20.0f32..20.0,
    ) {
        let field = Field::default();
        let mut ball = Ball::new(Vec2::new(x, y), 10.0);
        ball.place(Vec2::new(x, y), Vec2::new(vx, vy));

        ball.advance(&field, &[]);

        let p = ball.position();
        prop_assert!(p.x >= 10.0 && p.x <= 790.0);
        prop_assert!(p.y >= 10.0 && p.y <= 590.0);
    }

    /// Rate-limited turning never overshoots and reaches the target exactly.
    #[test]
    fn turning_converges_without_overshoot(
        start in -10.0f32..10.0,
        desired in -std::f32::consts::PI..std::f32::consts::PI,
    ) {
        let max_rate = 0.05f32;
        let initial = angle_difference(start, desired).abs();
        // ceil(diff / rate); the 1e-4 rad covers f32 rounding in the heading sum.
        let bound = ((initial + 1e-4) / max_rate).ceil() as u32;

        let mut heading = start;
        let mut previous = initial;
        let mut ticks = 0;
        while heading != desired {
            heading = turn_toward(heading, desired, max_rate);
            ticks += 1;
            let remaining = angle_difference(heading, desired).abs();
            prop_assert!(remaining <= previous + 1e-4);
            previous = remaining;
            prop_assert!(ticks <= bound, "took {} ticks, bound {}", ticks, bound);
        }
    }

    /// Two overlapping agents end up exactly touching.
    #[test]
    fn overlapping_pair_is_separated(
        x in 100.0f32..700.0,
        y in 100.0f32..500.0,
        angle in -std::f32::consts::PI..std::f32::consts::PI,
        distance in 0.5f32..39.5,
    ) {
        let a = Vec2::new(x, y);
        let b = a + Vec2::from_angle(angle) * distance;
        let mut pitch = Pitch::new(
            Field::default(),
            Ball::new(Vec2::new(20.0, 20.0), 10.0),
            vec![defender(0, a), defender(1, b)],
        );
        let mut events = Vec::new();
        let mut frame = TickFrame {
            tick: 0,
            walls: WallContact::empty(),
            bounce_position: Vec2::ZERO,
            events: &mut events,
        };

        SeparationResolver::new().resolve(&mut pitch, &mut frame);

        let agents = pitch.agents();
        let after = agents[0].position().distance(agents[1].position());
        prop_assert!((after - 40.0).abs() < 1e-2, "distance after: {}", after);
        // Both moved by the same amount.
        let moved_a = agents[0].position().distance(a);
        let moved_b = agents[1].position().distance(b);
        prop_assert!((moved_a - moved_b).abs() < 1e-3);
        prop_assert_eq!(events.len(), 1);
    }
}
