//! Static playing-field geometry.
//!
//! The field is the rectangle `[0, width] × [0, height]` with y growing
//! downwards. A goal mouth of length `goal_height` is centred on each short
//! side; the goal box (`goal_width` deep) lies outside the rectangle and only
//! matters to renderers.

use std::ops::RangeInclusive;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH, GOAL_HEIGHT, GOAL_WIDTH};

/// One of the two goal lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalSide {
    /// The goal on `x = 0`.
    Left,
    /// The goal on `x = width`.
    Right,
}

/// Field geometry. Immutable once built.
///
/// # Example
///
/// ```
/// use robosoccer_core::field::{Field, GoalSide};
/// use glam::Vec2;
///
/// let field = Field::new(800.0, 600.0, 20.0, 200.0);
/// assert_eq!(field.center(), Vec2::new(400.0, 300.0));
/// assert_eq!(field.goal_center(GoalSide::Right), Vec2::new(800.0, 300.0));
/// assert!(field.in_goal_band(250.0));
/// assert!(!field.in_goal_band(150.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    width: f32,
    height: f32,
    goal_width: f32,
    goal_height: f32,
}

impl Field {
    /// Creates a field. Dimensions are validated by
    /// [`SessionConfig::validate`](crate::config::SessionConfig::validate).
    #[must_use]
    pub const fn new(width: f32, height: f32, goal_width: f32, goal_height: f32) -> Self {
        Self {
            width,
            height,
            goal_width,
            goal_height,
        }
    }

    /// Field width (x extent).
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Field height (y extent).
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Depth of the goal box behind the goal line.
    #[must_use]
    pub const fn goal_width(&self) -> f32 {
        self.goal_width
    }

    /// Length of the goal mouth.
    #[must_use]
    pub const fn goal_height(&self) -> f32 {
        self.goal_height
    }

    /// Centre spot, where the ball is placed after a goal.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inclusive y-range of the goal mouth (same for both goals).
    #[must_use]
    pub fn goal_band(&self) -> RangeInclusive<f32> {
        let top = (self.height - self.goal_height) / 2.0;
        let bottom = (self.height + self.goal_height) / 2.0;
        top..=bottom
    }

    /// Whether `y` lies within the goal mouth.
    #[must_use]
    pub fn in_goal_band(&self, y: f32) -> bool {
        self.goal_band().contains(&y)
    }

    /// Centre of the goal mouth on the given goal line.
    #[must_use]
    pub fn goal_center(&self, side: GoalSide) -> Vec2 {
        match side {
            GoalSide::Left => Vec2::new(0.0, self.height / 2.0),
            GoalSide::Right => Vec2::new(self.width, self.height / 2.0),
        }
    }

    /// Whether `point` is at or beyond the goal line of `side`, inside the mouth.
    #[must_use]
    pub fn is_past_goal_line(&self, side: GoalSide, point: Vec2) -> bool {
        let crossed = match side {
            GoalSide::Left => point.x <= 0.0,
            GoalSide::Right => point.x >= self.width,
        };
        crossed && self.in_goal_band(point.y)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT, GOAL_WIDTH, GOAL_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_band_is_centred() {
        let field = Field::default();
        assert_eq!(field.goal_band(), 200.0..=400.0);
    }

    #[test]
    fn goal_band_edges_are_inclusive() {
        let field = Field::default();
        assert!(field.in_goal_band(200.0));
        assert!(field.in_goal_band(400.0));
        assert!(!field.in_goal_band(400.5));
    }

    #[test]
    fn past_goal_line_right() {
        let field = Field::default();
        assert!(field.is_past_goal_line(GoalSide::Right, Vec2::new(800.0, 300.0)));
        assert!(field.is_past_goal_line(GoalSide::Right, Vec2::new(815.0, 210.0)));
        assert!(!field.is_past_goal_line(GoalSide::Right, Vec2::new(799.9, 300.0)));
        // Over the line but wide of the post.
        assert!(!field.is_past_goal_line(GoalSide::Right, Vec2::new(805.0, 100.0)));
    }

    #[test]
    fn past_goal_line_left() {
        let field = Field::default();
        assert!(field.is_past_goal_line(GoalSide::Left, Vec2::new(0.0, 300.0)));
        assert!(field.is_past_goal_line(GoalSide::Left, Vec2::new(-3.0, 390.0)));
        assert!(!field.is_past_goal_line(GoalSide::Left, Vec2::new(0.1, 300.0)));
    }

    #[test]
    fn goal_centers() {
        let field = Field::new(1000.0, 500.0, 10.0, 100.0);
        assert_eq!(field.goal_center(GoalSide::Left), Vec2::new(0.0, 250.0));
        assert_eq!(field.goal_center(GoalSide::Right), Vec2::new(1000.0, 250.0));
    }

    #[test]
    fn field_is_serializable() {
        let field = Field::default();
        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(field, back);
    }
}
