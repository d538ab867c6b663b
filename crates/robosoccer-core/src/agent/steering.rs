//! Heading arithmetic shared by the agent update and its policies.
//!
//! Headings are radians measured from +x towards +y. They are not kept
//! wrapped; only differences are wrapped into `(-π, π]`.

use glam::Vec2;

/// Unit vector pointing along `heading`.
#[must_use]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// Direction from `from` to `to`, in `(-π, π]`.
#[must_use]
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Wraps an angle into `(-π, π]`.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.sin().atan2(angle.cos())
}

/// Shortest signed rotation from `heading` to `desired`.
#[must_use]
pub fn angle_difference(heading: f32, desired: f32) -> f32 {
    wrap_angle(desired - heading)
}

/// One tick of rate-limited turning towards `desired`.
///
/// Steps by `max_rate` while the remaining difference is larger than that,
/// then locks onto `desired` exactly, so it never overshoots or oscillates.
#[must_use]
pub fn turn_toward(heading: f32, desired: f32, max_rate: f32) -> f32 {
    let diff = angle_difference(heading, desired);
    if diff.abs() > max_rate {
        heading + if diff > 0.0 { max_rate } else { -max_rate }
    } else {
        desired
    }
}
