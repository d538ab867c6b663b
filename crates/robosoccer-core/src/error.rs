//! Result and Error types for the crate.
//!
//! Only session construction and restoring saved state can fail. Once a
//! [`SimulationSession`] exists, every tick is a total function over its state.
//!
//! [`SimulationSession`]: crate::session::SimulationSession
use thiserror::Error;

/// Result containing a [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Reasons a [`SessionConfig`](crate::config::SessionConfig) or a
/// deserialized pitch is rejected.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A numeric parameter is NaN or infinite.
    #[error("`{name}` must be finite, got {value}")]
    NonFinite {
        /// Parameter path, e.g. `field.width`.
        name: &'static str,
        /// Offending value.
        value: f32,
    },

    /// A length, radius or speed that must be strictly positive is not.
    #[error("`{name}` must be positive, got {value}")]
    NonPositive {
        /// Parameter path.
        name: &'static str,
        /// Offending value.
        value: f32,
    },

    /// The goal mouth does not fit on the goal line.
    #[error("goal height {goal_height} exceeds field height {field_height}")]
    GoalTooTall {
        /// Configured goal mouth length.
        goal_height: f32,
        /// Configured field height.
        field_height: f32,
    },

    /// The ball cannot be contained by the field.
    #[error("field {width}x{height} is too small for a ball of radius {ball_radius}")]
    FieldTooSmall {
        /// Field width.
        width: f32,
        /// Field height.
        height: f32,
        /// Ball radius.
        ball_radius: f32,
    },

    /// A probability lies outside `[0, 1]`.
    #[error("`{name}` must lie in [0, 1], got {value}")]
    InvalidProbability {
        /// Parameter path.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A defender was given an explicit but empty patrol route.
    #[error("defender spawn #{index} has an empty patrol route")]
    EmptyPatrol {
        /// Position of the spawn in the config's agent list.
        index: usize,
    },

    /// A spawn carries a non-finite coordinate.
    #[error("agent spawn #{index} has a non-finite pose")]
    InvalidSpawn {
        /// Position of the spawn in the config's agent list.
        index: usize,
    },

    /// A patrol's target index does not point into its waypoint list.
    #[error("patrol target {target} out of range for {len} waypoints")]
    InvalidPatrol {
        /// Stored target index.
        target: usize,
        /// Number of waypoints.
        len: usize,
    },

    /// An agent is not stored at the slot its id names.
    #[error("agent in slot {index} carries id {id}")]
    MisplacedAgent {
        /// Slot in the pitch's agent list.
        index: usize,
        /// Id the agent carries.
        id: u32,
    },

    /// JSON parse error, this wraps a [`serde_json::Error`]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
