//! # Robosoccer Python Bindings
//!
//! PyO3 bindings exposing the match simulation to Python drivers and
//! renderers.
//!
//! ## Usage
//!
//! ```python
//! from _robosoccer import Session, Team
//!
//! session = Session(seed=42)
//! goals = session.step(600)  # GIL released while stepping
//!
//! print(session.scoreboard)
//! for agent in session.agents():
//!     print(agent.team, agent.position, agent.has_ball)
//!
//! obs = session.observe()  # flat numpy array for learning loops
//! ```

use numpy::{PyArray1, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use robosoccer_core::agent::{Role, Team};
use robosoccer_core::config::SessionConfig;
use robosoccer_core::error::ConfigError;
use robosoccer_core::match_runner::{self, MatchSummary};
use robosoccer_core::session::SimulationSession;
use robosoccer_core::snapshot::{AgentView, BallView};

fn config_error(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn load_config(config_json: Option<&str>, seed: Option<u64>) -> PyResult<SessionConfig> {
    let mut config = match config_json {
        Some(json) => SessionConfig::from_json(json).map_err(config_error)?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

// =============================================================================
// Enums
// =============================================================================

/// Team colour.
#[pyclass(name = "Team", eq, eq_int, hash, frozen)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PyTeam {
    /// Attacks the right goal.
    Red,
    /// Attacks the left goal.
    Blue,
}

impl From<Team> for PyTeam {
    fn from(team: Team) -> Self {
        match team {
            Team::Red => PyTeam::Red,
            Team::Blue => PyTeam::Blue,
        }
    }
}

/// Agent policy.
#[pyclass(name = "Role", eq, eq_int, hash, frozen)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PyRole {
    /// Chases, carries and shoots.
    Attacker,
    /// Patrols.
    Defender,
}

impl From<Role> for PyRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Attacker => PyRole::Attacker,
            Role::Defender => PyRole::Defender,
        }
    }
}

// =============================================================================
// Views
// =============================================================================

/// Ball state.
#[pyclass(name = "Ball", frozen)]
#[derive(Clone)]
pub struct PyBall {
    inner: BallView,
}

#[pymethods]
impl PyBall {
    /// (x, y) centre.
    #[getter]
    fn position(&self) -> (f32, f32) {
        self.inner.position.into()
    }

    /// (vx, vy) velocity in units per tick.
    #[getter]
    fn velocity(&self) -> (f32, f32) {
        self.inner.velocity.into()
    }

    /// Radius.
    #[getter]
    fn radius(&self) -> f32 {
        self.inner.radius
    }

    /// Id of the carrying agent, or None.
    #[getter]
    fn owner(&self) -> Option<u32> {
        self.inner.attached_to.map(|id| id.as_u32())
    }

    fn __repr__(&self) -> String {
        format!(
            "Ball(position=({:.1}, {:.1}), owner={:?})",
            self.inner.position.x,
            self.inner.position.y,
            self.owner()
        )
    }
}

/// Agent state.
#[pyclass(name = "Agent", frozen)]
#[derive(Clone)]
pub struct PyAgent {
    inner: AgentView,
}

#[pymethods]
impl PyAgent {
    /// Index in the line-up.
    #[getter]
    fn id(&self) -> u32 {
        self.inner.id.as_u32()
    }

    /// Team colour.
    #[getter]
    fn team(&self) -> PyTeam {
        self.inner.team.into()
    }

    /// Policy.
    #[getter]
    fn role(&self) -> PyRole {
        self.inner.role.into()
    }

    /// (x, y) centre.
    #[getter]
    fn position(&self) -> (f32, f32) {
        self.inner.position.into()
    }

    /// Heading in radians.
    #[getter]
    fn heading(&self) -> f32 {
        self.inner.heading
    }

    /// Body radius.
    #[getter]
    fn radius(&self) -> f32 {
        self.inner.radius
    }

    /// (x, y) dribbler point.
    #[getter]
    fn dribbler_point(&self) -> (f32, f32) {
        self.inner.dribbler_point.into()
    }

    /// Whether this agent carries the ball.
    #[getter]
    fn has_ball(&self) -> bool {
        self.inner.has_ball
    }

    fn __repr__(&self) -> String {
        format!(
            "Agent(id={}, team={}, role={}, position=({:.1}, {:.1}))",
            self.inner.id, self.inner.team, self.inner.role, self.inner.position.x, self.inner.position.y
        )
    }
}

/// Result of one batch match.
#[pyclass(name = "MatchSummary", frozen)]
pub struct PyMatchSummary {
    inner: MatchSummary,
}

#[pymethods]
impl PyMatchSummary {
    /// Seed the match ran with.
    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed
    }

    /// Ticks played.
    #[getter]
    fn ticks(&self) -> u64 {
        self.inner.ticks
    }

    /// (red, blue) final score.
    #[getter]
    fn score(&self) -> (u32, u32) {
        (self.inner.score.red(), self.inner.score.blue())
    }

    /// Final state hash.
    #[getter]
    fn state_hash(&self) -> u64 {
        self.inner.state_hash
    }

    fn __repr__(&self) -> String {
        format!("MatchSummary(seed={}, score={})", self.inner.seed, self.inner.score)
    }
}

// =============================================================================
// Session
// =============================================================================

/// A running match.
#[pyclass(name = "Session")]
pub struct PySession {
    inner: SimulationSession,
    config: SessionConfig,
}

#[pymethods]
impl PySession {
    /// Create a session from an optional JSON config; `seed` overrides the
    /// config's seed.
    #[new]
    #[pyo3(signature = (config_json=None, seed=None))]
    fn new(config_json: Option<&str>, seed: Option<u64>) -> PyResult<Self> {
        let config = load_config(config_json, seed)?;
        let inner = SimulationSession::new(&config).map_err(config_error)?;
        Ok(Self { inner, config })
    }

    /// Completed ticks.
    #[getter]
    fn tick(&self) -> u64 {
        self.inner.tick()
    }

    /// RNG seed.
    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed()
    }

    /// (red, blue) score.
    #[getter]
    fn score(&self) -> (u32, u32) {
        let score = self.inner.score();
        (score.red(), score.blue())
    }

    /// Overlay text, e.g. "Red: 1   Blue: 0".
    #[getter]
    fn scoreboard(&self) -> String {
        self.inner.score().scoreboard()
    }

    /// Advance `ticks` ticks and return the number of goals scored.
    ///
    /// Releases the GIL while stepping.
    #[pyo3(signature = (ticks=1))]
    fn step(&mut self, py: Python<'_>, ticks: u64) -> usize {
        py.allow_threads(|| self.inner.run(ticks).len())
    }

    /// Current ball state.
    fn ball(&self) -> PyBall {
        PyBall {
            inner: BallView::from(self.inner.pitch().ball()),
        }
    }

    /// Current agent states in id order.
    fn agents(&self) -> Vec<PyAgent> {
        self.inner
            .snapshot()
            .agents
            .into_iter()
            .map(|inner| PyAgent { inner })
            .collect()
    }

    /// Full renderer snapshot as JSON.
    fn snapshot_json(&self) -> PyResult<String> {
        self.inner
            .snapshot()
            .to_json()
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    /// Events of the most recent tick as JSON.
    fn events_json(&self) -> PyResult<String> {
        serde_json::to_string(self.inner.events())
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    /// Deterministic hash of the current state.
    fn state_hash(&self) -> u64 {
        self.inner.state_hash()
    }

    /// Flat observation vector.
    ///
    /// Layout: ball `[x, y, vx, vy]`, then per agent
    /// `[x, y, cos(heading), sin(heading), has_ball]`.
    fn observe<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        let pitch = self.inner.pitch();
        let ball = pitch.ball();
        let mut flat = Vec::with_capacity(4 + 5 * pitch.agents().len());
        flat.extend_from_slice(&[
            ball.position().x,
            ball.position().y,
            ball.velocity().x,
            ball.velocity().y,
        ]);
        for agent in pitch.agents() {
            let facing = agent.facing();
            let has_ball = ball.attached_to() == Some(agent.id());
            flat.extend_from_slice(&[
                agent.position().x,
                agent.position().y,
                facing.x,
                facing.y,
                if has_ball { 1.0 } else { 0.0 },
            ]);
        }
        flat.to_pyarray(py)
    }

    /// Restart the match from the session's config, optionally with a new seed.
    #[pyo3(signature = (seed=None))]
    fn reset(&mut self, seed: Option<u64>) -> PyResult<()> {
        if let Some(seed) = seed {
            self.config.seed = seed;
        }
        self.inner = SimulationSession::new(&self.config).map_err(config_error)?;
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!(
            "Session(tick={}, seed={}, score='{}')",
            self.inner.tick(),
            self.inner.seed(),
            self.inner.score()
        )
    }
}

// =============================================================================
// Batch
// =============================================================================

/// Play one match per seed in parallel. Releases the GIL.
#[pyfunction]
#[pyo3(signature = (seeds, ticks, config_json=None))]
fn run_matches(
    py: Python<'_>,
    seeds: Vec<u64>,
    ticks: u64,
    config_json: Option<&str>,
) -> PyResult<Vec<PyMatchSummary>> {
    let config = load_config(config_json, None)?;
    let summaries = py
        .allow_threads(|| match_runner::run_matches(&config, &seeds, ticks))
        .map_err(config_error)?;
    Ok(summaries
        .into_iter()
        .map(|inner| PyMatchSummary { inner })
        .collect())
}

#[pymodule]
fn _robosoccer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_class::<PyBall>()?;
    m.add_class::<PyAgent>()?;
    m.add_class::<PyMatchSummary>()?;
    m.add_class::<PyTeam>()?;
    m.add_class::<PyRole>()?;
    m.add_function(wrap_pyfunction!(run_matches, m)?)?;
    Ok(())
}
