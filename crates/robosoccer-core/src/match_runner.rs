//! Batch runs of independent matches.
//!
//! Each seed gets its own session, stepped on its own rayon task. Sessions
//! share nothing, so results depend only on the config and the seed, never
//! on scheduling.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::events::MatchEvent;
use crate::score::Score;
use crate::session::SimulationSession;

/// Outcome of one batch match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Seed the match ran with.
    pub seed: u64,
    /// Ticks played.
    pub ticks: u64,
    /// Final score.
    pub score: Score,
    /// Goal events in order.
    pub goals: Vec<MatchEvent>,
    /// Final state hash.
    pub state_hash: u64,
}

/// Plays one match per seed, `ticks` long, in parallel.
///
/// Results come back in the order of `seeds`. The config's own seed is
/// ignored.
///
/// # Errors
///
/// Returns the config's validation error before any match starts.
///
/// # Example
///
/// ```
/// use robosoccer_core::config::SessionConfig;
/// use robosoccer_core::match_runner::run_matches;
///
/// let results = run_matches(&SessionConfig::default(), &[1, 2, 3], 200)?;
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[1].seed, 2);
/// # Ok::<(), robosoccer_core::error::ConfigError>(())
/// ```
pub fn run_matches(config: &SessionConfig, seeds: &[u64], ticks: u64) -> Result<Vec<MatchSummary>> {
    config.validate()?;

    let span = tracing::debug_span!("run_matches", matches = seeds.len(), ticks);
    let _guard = span.enter();

    let summaries: Vec<MatchSummary> = seeds
        .par_iter()
        .map(|&seed| play(config, seed, ticks))
        .collect::<Result<_>>()?;

    let goals: u32 = summaries.iter().map(|s| s.score.total()).sum();
    tracing::debug!(goals, "batch complete");
    Ok(summaries)
}

fn play(config: &SessionConfig, seed: u64, ticks: u64) -> Result<MatchSummary> {
    let config = SessionConfig {
        seed,
        ..config.clone()
    };
    let mut session = SimulationSession::new(&config)?;
    let goals = session.run(ticks);

    Ok(MatchSummary {
        seed,
        ticks,
        score: session.score(),
        goals,
        state_hash: session.state_hash(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn batch_matches_sequential_runs() {
        let config = SessionConfig::default();
        let seeds = [3, 1, 4, 1, 5];

        let batch = run_matches(&config, &seeds, 300).unwrap();

        for (summary, &seed) in batch.iter().zip(&seeds) {
            let mut session = SimulationSession::standard(seed);
            session.run(300);
            assert_eq!(summary.seed, seed);
            assert_eq!(summary.state_hash, session.state_hash());
            assert_eq!(summary.score, session.score());
        }
    }

    #[test]
    fn goal_count_matches_score() {
        let results = run_matches(&SessionConfig::default(), &[7, 8], 2_000).unwrap();
        for summary in results {
            assert_eq!(summary.goals.len() as u32, summary.score.total());
        }
    }

    #[test]
    fn invalid_config_fails_up_front() {
        let mut config = SessionConfig::default();
        config.behavior.near_goal_kick_probability = -0.1;
        assert!(matches!(
            run_matches(&config, &[1], 10),
            Err(ConfigError::InvalidProbability { .. })
        ));
    }
}
