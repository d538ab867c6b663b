//! Post-update resolvers.
//!
//! After the ball has advanced and every agent has updated, the session hands
//! the pitch to each resolver in order. Resolvers apply the rules that look at
//! the world as a whole rather than at a single agent.
//!
//! # Invariants
//!
//! - Resolvers run in a fixed order and must be deterministic
//! - A resolver may mutate the pitch and append events, nothing else
//!
//! # Available Resolvers
//!
//! - [`GoalResolver`]: goal detection, scoring and position reset
//! - [`SeparationResolver`]: pairwise agent overlap resolution

mod goal;
mod separation;

pub use goal::GoalResolver;
pub use separation::SeparationResolver;

use glam::Vec2;

use crate::ball::WallContact;
use crate::events::MatchEvent;
use crate::pitch::Pitch;

/// Per-tick facts resolvers may need beyond the pitch itself.
#[derive(Debug)]
pub struct TickFrame<'a> {
    /// Tick being resolved.
    pub tick: u64,
    /// Walls the free ball bounced off during this tick's ball advance.
    pub walls: WallContact,
    /// Ball position right after this tick's ball advance.
    pub bounce_position: Vec2,
    /// Event log of the tick; append only.
    pub events: &'a mut Vec<MatchEvent>,
}

/// A whole-pitch rule applied once per tick.
///
/// # Example
///
/// ```
/// use robosoccer_core::pitch::Pitch;
/// use robosoccer_core::resolver::{Resolver, TickFrame};
///
/// struct Referee;
///
/// impl Resolver for Referee {
///     fn name(&self) -> &'static str {
///         "referee"
///     }
///
///     fn resolve(&self, pitch: &mut Pitch, frame: &mut TickFrame<'_>) {
///         // Inspect the pitch, push events
///     }
/// }
/// ```
pub trait Resolver: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Applies the rule to `pitch`.
    fn resolve(&self, pitch: &mut Pitch, frame: &mut TickFrame<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolver_is_object_safe() {
        fn _accepts_boxed(_resolver: Box<dyn Resolver>) {}
        fn _accepts_slice(_resolvers: &[Box<dyn Resolver>]) {}
    }
}
