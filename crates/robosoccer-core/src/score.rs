//! Goal counters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::agent::Team;

/// Goals per team. Only ever incremented; survives position resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    red: u32,
    blue: u32,
}

impl Score {
    /// 0 – 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { red: 0, blue: 0 }
    }

    /// Red's goals.
    #[must_use]
    pub const fn red(&self) -> u32 {
        self.red
    }

    /// Blue's goals.
    #[must_use]
    pub const fn blue(&self) -> u32 {
        self.blue
    }

    /// Goals for `team`.
    #[must_use]
    pub const fn get(&self, team: Team) -> u32 {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
        }
    }

    /// Total goals scored.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.red + self.blue
    }

    /// Credits a goal to `team`.
    pub fn record(&mut self, team: Team) {
        match team {
            Team::Red => self.red += 1,
            Team::Blue => self.blue += 1,
        }
    }

    /// The overlay line drawn above the field.
    #[must_use]
    pub fn scoreboard(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Red: {}   Blue: {}", self.red, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_per_team() {
        let mut score = Score::new();
        score.record(Team::Red);
        score.record(Team::Red);
        score.record(Team::Blue);

        assert_eq!(score.get(Team::Red), 2);
        assert_eq!(score.get(Team::Blue), 1);
        assert_eq!(score.total(), 3);
    }

    #[test]
    fn scoreboard_text() {
        let mut score = Score::new();
        assert_eq!(score.scoreboard(), "Red: 0   Blue: 0");
        score.record(Team::Blue);
        assert_eq!(score.scoreboard(), "Red: 0   Blue: 1");
    }
}
