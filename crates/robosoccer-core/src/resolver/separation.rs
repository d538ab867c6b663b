//! Pairwise agent separation.
//!
//! Every unordered pair of overlapping agents is pushed apart along the line
//! between their centres, each moving half the overlap. Pairs are visited in
//! id order `(0,1), (0,2), …, (1,2), …`, and a later pair sees the positions
//! left by earlier ones. With three or more agents in one cluster, a single
//! pass may leave residual overlap.

use crate::events::MatchEvent;
use crate::pitch::Pitch;

use super::{Resolver, TickFrame};

/// Pushes overlapping agents apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeparationResolver;

impl SeparationResolver {
    /// Creates the resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Resolver for SeparationResolver {
    fn name(&self) -> &'static str {
        "separation"
    }

    fn resolve(&self, pitch: &mut Pitch, frame: &mut TickFrame<'_>) {
        let agents = pitch.agents_mut();
        for i in 0..agents.len() {
            let (head, tail) = agents.split_at_mut(i + 1);
            let first = &mut head[i];
            for second in tail {
                let delta = second.position() - first.position();
                let distance = delta.length();
                let overlap = first.radius() + second.radius() - distance;
                // Coincident centres have no normal; leave them.
                if distance <= 0.0 || overlap <= 0.0 {
                    continue;
                }

                let push = delta / distance * (overlap / 2.0);
                first.displace(-push);
                second.displace(push);

                frame.events.push(MatchEvent::AgentContact {
                    first: first.id(),
                    second: second.id(),
                });
                tracing::trace!(
                    tick = frame.tick,
                    first = %first.id(),
                    second = %second.id(),
                    overlap,
                    "agents separated"
                );
            }
        }
    }
}
