//! The match loop.
//!
//! [`SimulationSession`] owns one pitch, one seeded RNG and the resolver chain,
//! and advances them together one tick at a time:
//!
//! 1. **BALL**: advance the ball (dribbler snap or free flight with bounces)
//! 2. **AGENTS**: update every agent in id order against the shared ball
//! 3. **RESOLUTION**: run the resolvers in order (goal, then separation)
//! 4. **APPLY**: advance the tick counter
//!
//! Rendering and wall-clock pacing belong to the driver.
//!
//! # Determinism
//!
//! All randomness comes from a `ChaCha8Rng` seeded from the config, agents are
//! updated in a fixed order and resolvers run in a fixed order. Two sessions
//! built from the same config produce identical
//! [`state_hash`](SimulationSession::state_hash) sequences.
//!
//! # Example
//!
//! ```
//! use robosoccer_core::session::SimulationSession;
//!
//! let mut session = SimulationSession::standard(42);
//! session.run(100);
//!
//! assert_eq!(session.tick(), 100);
//! assert_eq!(session.seed(), 42);
//! println!("{}", session.score().scoreboard());
//! ```

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::agent::BallContact;
use crate::config::{BehaviorParams, PhysicsParams, SessionConfig};
use crate::error::Result;
use crate::events::MatchEvent;
use crate::field::Field;
use crate::hash::hash_session;
use crate::pitch::Pitch;
use crate::resolver::{GoalResolver, Resolver, SeparationResolver, TickFrame};
use crate::score::Score;
use crate::snapshot::SessionSnapshot;

// =============================================================================
// TickContext
// =============================================================================

/// Read-only parameters handed to agents during their update.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    /// Field geometry.
    pub field: &'a Field,
    /// Ball physics.
    pub physics: &'a PhysicsParams,
    /// Policy tuning.
    pub behavior: &'a BehaviorParams,
}

// =============================================================================
// SimulationSession
// =============================================================================

/// One running match.
pub struct SimulationSession {
    pitch: Pitch,
    physics: PhysicsParams,
    behavior: BehaviorParams,
    resolvers: Vec<Box<dyn Resolver>>,
    rng: ChaCha8Rng,
    seed: u64,
    tick: u64,
    /// Events of the most recent tick.
    events: Vec<MatchEvent>,
}

impl fmt::Debug for SimulationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolvers: Vec<_> = self.resolvers.iter().map(|r| r.name()).collect();
        f.debug_struct("SimulationSession")
            .field("pitch", &self.pitch)
            .field("physics", &self.physics)
            .field("behavior", &self.behavior)
            .field("resolvers", &resolvers)
            .field("seed", &self.seed)
            .field("tick", &self.tick)
            .finish_non_exhaustive()
    }
}

impl SimulationSession {
    /// Builds a session from a config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::error::ConfigError) if the config
    /// fails validation.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let pitch = config.build_pitch()?;
        Ok(Self::from_parts(config, pitch))
    }

    /// The reference four-robot match with the given seed.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        let config = SessionConfig::with_seed(seed);
        // The default line-up is valid by construction.
        let pitch = config.assemble_pitch();
        Self::from_parts(&config, pitch)
    }

    fn from_parts(config: &SessionConfig, pitch: Pitch) -> Self {
        tracing::debug!(
            seed = config.seed,
            agents = pitch.agents().len(),
            scoring = ?config.scoring,
            "session created"
        );

        Self {
            pitch,
            physics: config.physics,
            behavior: config.behavior,
            resolvers: vec![
                Box::new(GoalResolver::new(config.scoring)),
                Box::new(SeparationResolver::new()),
            ],
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            seed: config.seed,
            tick: 0,
            events: Vec::new(),
        }
    }

    /// Advances the match by one tick and returns what happened.
    pub fn step(&mut self) -> &[MatchEvent] {
        self.events.clear();

        // BALL
        let (field, ball, agents) = self.pitch.split_mut();
        let walls = ball.advance(field, agents);
        let bounce_position = ball.position();
        if !walls.is_empty() {
            self.events.push(MatchEvent::WallBounce { walls });
        }

        // AGENTS
        let ctx = TickContext {
            field,
            physics: &self.physics,
            behavior: &self.behavior,
        };
        for agent in agents.iter_mut() {
            let actions = agent.update(ball, &ctx, &mut self.rng);
            let id = agent.id();
            if let Some(velocity) = actions.kick {
                tracing::debug!(tick = self.tick, agent = %id, ?velocity, "kick");
                self.events.push(MatchEvent::Kick { agent: id, velocity });
            }
            match actions.contact {
                Some(BallContact::Captured) => {
                    tracing::debug!(tick = self.tick, agent = %id, "ball captured");
                    self.events.push(MatchEvent::Capture { agent: id });
                }
                Some(BallContact::Pushed) => {
                    self.events.push(MatchEvent::BallPushed { agent: id });
                }
                None => {}
            }
        }

        // RESOLUTION
        let mut frame = TickFrame {
            tick: self.tick,
            walls,
            bounce_position,
            events: &mut self.events,
        };
        for resolver in &self.resolvers {
            resolver.resolve(&mut self.pitch, &mut frame);
        }

        // APPLY
        self.tick += 1;
        tracing::trace!(tick = self.tick, events = self.events.len(), "tick complete");

        &self.events
    }

    /// Runs `ticks` steps. Returns the goals scored along the way.
    pub fn run(&mut self, ticks: u64) -> Vec<MatchEvent> {
        let mut goals = Vec::new();
        for _ in 0..ticks {
            goals.extend(self.step().iter().copied().filter(MatchEvent::is_goal));
        }
        goals
    }

    /// Number of completed ticks.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Seed the RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> Score {
        self.pitch.score()
    }

    /// Read-only world state.
    #[must_use]
    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    /// Mutable world state, for scenario setup between ticks.
    pub fn pitch_mut(&mut self) -> &mut Pitch {
        &mut self.pitch
    }

    /// Ball physics in use.
    #[must_use]
    pub fn physics(&self) -> &PhysicsParams {
        &self.physics
    }

    /// Policy tuning in use.
    #[must_use]
    pub fn behavior(&self) -> &BehaviorParams {
        &self.behavior
    }

    /// Events of the most recent tick.
    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Appends a resolver after the built-in ones.
    pub fn add_resolver(&mut self, resolver: Box<dyn Resolver>) {
        self.resolvers.push(resolver);
    }

    /// Number of resolvers in the chain.
    #[must_use]
    pub fn resolver_count(&self) -> usize {
        self.resolvers.len()
    }

    /// Renderer view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.pitch, self.tick)
    }

    /// Deterministic hash of the current state.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        hash_session(self)
    }
}
