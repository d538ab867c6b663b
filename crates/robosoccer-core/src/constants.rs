//! Default tuning values for the match.
//!
//! Distances are in field units (pixels of the reference 800×600 field),
//! speeds in units per tick and angles in radians.

// --- Field ---

/// Default field width.
pub const FIELD_WIDTH: f32 = 800.0;

/// Default field height.
pub const FIELD_HEIGHT: f32 = 600.0;

/// Depth of the goal box drawn behind each goal line.
pub const GOAL_WIDTH: f32 = 20.0;

/// Length of the goal mouth along the goal line.
pub const GOAL_HEIGHT: f32 = 200.0;

// --- Ball ---

/// Ball radius.
pub const BALL_RADIUS: f32 = 10.0;

/// Multiplicative velocity damping applied to a free ball every tick.
pub const BALL_DAMPING: f32 = 0.99;

/// Speed given to the ball by a kick.
pub const KICK_SPEED: f32 = 7.0;

/// Fraction of the agent's velocity transferred to a ball it bumps into.
pub const PUSH_TRANSFER: f32 = 0.5;

// --- Agents ---

/// Agent body radius.
pub const AGENT_RADIUS: f32 = 20.0;

/// Maximum heading change per tick.
pub const MAX_ANGULAR_SPEED: f32 = 0.05;

/// Radius of the dribbler capture zone.
pub const DRIBBLER_RADIUS: f32 = 10.0;

/// Red team linear speed.
pub const RED_SPEED: f32 = 2.0;

/// Blue team linear speed.
pub const BLUE_SPEED: f32 = 1.0;

/// Distance at which a defender counts a patrol waypoint as reached.
pub const PATROL_CAPTURE_DISTANCE: f32 = 5.0;

/// Vertical half-span of the default defender patrol.
pub const PATROL_HALF_SPAN: f32 = 50.0;

// --- Attacker behavior ---

/// Heading error under which a ball-carrying attacker shoots.
pub const KICK_ALIGNMENT_TOLERANCE: f32 = 0.1;

/// Distance to the goal centre inside which an attacker may take a snap shot.
pub const NEAR_GOAL_DISTANCE: f32 = 150.0;

/// Per-tick probability of a snap shot near the goal.
pub const NEAR_GOAL_KICK_PROBABILITY: f64 = 0.2;
