//! # Robosoccer Core
//!
//! Tick-based 2D robot soccer simulation.
//!
//! A rectangular field with a goal mouth on each short side, one ball and a
//! handful of robots split into a red team (attacking right) and a blue team
//! (attacking left). Each robot runs one of two fixed policies: an attacker
//! that chases the ball, carries it and shoots, or a defender that paces a
//! patrol route. The crate advances the world one tick at a time, detects
//! goals, keeps score and resolves overlaps. Rendering and pacing are left to
//! the driver.
//!
//! ## Architecture
//!
//! - **State**: [`pitch::Pitch`] owns the [`field::Field`], [`ball::Ball`],
//!   [`agent::Agent`]s and [`score::Score`]
//! - **Agents**: decide and update in id order against the shared ball
//! - **Resolvers**: whole-pitch rules run after the agents (goal, separation)
//! - **Session**: [`session::SimulationSession`] ties these to a seeded RNG
//!
//! ## Usage
//!
//! ```
//! use robosoccer_core::{MatchEvent, SessionConfig, SimulationSession};
//!
//! let config = SessionConfig::with_seed(42);
//! let mut session = SimulationSession::new(&config)?;
//!
//! for _ in 0..1_000 {
//!     for event in session.step() {
//!         if let MatchEvent::Goal { team, .. } = event {
//!             println!("goal for {team}");
//!         }
//!     }
//! }
//! println!("{}", session.score().scoreboard());
//! # Ok::<(), robosoccer_core::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod agent;
pub mod ball;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod field;
pub mod hash;
pub mod match_runner;
pub mod pitch;
pub mod resolver;
pub mod score;
pub mod session;
pub mod snapshot;

pub use agent::{Agent, AgentId, Role, Team};
pub use ball::{Ball, WallContact};
pub use config::{ScoringRule, SessionConfig};
pub use error::{ConfigError, Result};
pub use events::MatchEvent;
pub use field::{Field, GoalSide};
pub use match_runner::{run_matches, MatchSummary};
pub use pitch::Pitch;
pub use score::Score;
pub use session::SimulationSession;
pub use snapshot::SessionSnapshot;

#[cfg(test)]
mod tests;
