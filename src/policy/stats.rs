//! Per-action outcome statistics

use std::fmt;

use serde::{Deserialize, Serialize};

/// Average weight at or above which an action counts as solved.
///
/// The training pipeline records sampled moves with weight 1.0 and solved
/// endgame moves with weight 2.0; the cut sits just below 2.0. It only holds
/// for that weighting scheme.
pub const SOLVED_WEIGHT_THRESHOLD: f64 = 1.9;

/// How the recorded outcomes for an action were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    /// Randomly sampled during opening/midgame exploration.
    Random,
    /// Chosen by the exhaustive endgame solver.
    Solved,
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSource::Random => write!(f, "random"),
            MoveSource::Solved => write!(f, "solved"),
        }
    }
}

/// Aggregated outcome for one (state, move) pair.
///
/// `wins`, `losses` and `ties` are weighted sums, not counts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionStats {
    pub games_played: u64,
    #[serde(default)]
    pub total_weight: f64,
    #[serde(default)]
    pub wins: f64,
    #[serde(default)]
    pub losses: f64,
    #[serde(default)]
    pub ties: f64,
}

impl ActionStats {
    /// wins / totalWeight, or 0 when no weight was recorded.
    pub fn win_rate(&self) -> f64 {
        if self.total_weight > 0.0 {
            self.wins / self.total_weight
        } else {
            0.0
        }
    }

    /// totalWeight / gamesPlayed, or 0 when no games were recorded.
    pub fn average_weight(&self) -> f64 {
        if self.games_played > 0 {
            self.total_weight / self.games_played as f64
        } else {
            0.0
        }
    }

    pub fn classify(&self) -> MoveSource {
        self.classify_with_threshold(SOLVED_WEIGHT_THRESHOLD)
    }

    pub fn classify_with_threshold(&self, threshold: f64) -> MoveSource {
        if self.average_weight() >= threshold {
            MoveSource::Solved
        } else {
            MoveSource::Random
        }
    }
}

/// Classify an action as random or solved by its average weight.
pub fn classify_weight(stats: &ActionStats) -> MoveSource {
    stats.classify()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(games_played: u64, total_weight: f64) -> ActionStats {
        ActionStats {
            games_played,
            total_weight,
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_weight() {
        assert_eq!(classify_weight(&stats(10, 20.0)), MoveSource::Solved);
        assert_eq!(classify_weight(&stats(10, 10.0)), MoveSource::Random);
    }

    #[test]
    fn test_classify_boundary() {
        assert_eq!(classify_weight(&stats(10, 19.0)), MoveSource::Solved);
        assert_eq!(classify_weight(&stats(100, 189.0)), MoveSource::Random);
    }

    #[test]
    fn test_zero_games_is_random() {
        assert_eq!(stats(0, 0.0).average_weight(), 0.0);
        assert_eq!(classify_weight(&stats(0, 0.0)), MoveSource::Random);
    }

    #[test]
    fn test_win_rate_guards_zero_weight() {
        let s = ActionStats {
            games_played: 3,
            total_weight: 0.0,
            wins: 2.0,
            ..Default::default()
        };
        assert_eq!(s.win_rate(), 0.0);
    }

    #[test]
    fn test_win_rate_uses_weight() {
        let s = ActionStats {
            games_played: 4,
            total_weight: 6.0,
            wins: 4.5,
            losses: 1.5,
            ties: 0.0,
        };
        assert!((s.win_rate() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let s: ActionStats = serde_json::from_str(
            r#"{"gamesPlayed": 5, "totalWeight": 7.0, "wins": 3.0, "losses": 4.0, "ties": 0}"#,
        )
        .unwrap();
        assert_eq!(s.games_played, 5);
        assert_eq!(s.total_weight, 7.0);
    }
}
