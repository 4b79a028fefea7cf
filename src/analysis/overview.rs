//! Whole-policy overview: opening ranking, exploration and win-rate spread

use serde::Serialize;

use super::stats::{mean, ratio, upper_median};
use crate::{
    Result,
    policy::{ActionStats, PolicyDocument},
};

/// An action ranked by win rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMove {
    pub key: String,
    pub win_rate: f64,
    pub games_played: u64,
    pub wins: f64,
    pub losses: f64,
}

impl RankedMove {
    pub fn new(key: &str, stats: &ActionStats) -> Self {
        Self {
            key: key.to_string(),
            win_rate: stats.win_rate(),
            games_played: stats.games_played,
            wins: stats.wins,
            losses: stats.losses,
        }
    }
}

/// Games-per-action spread over a set of actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorationSummary {
    pub pairs: usize,
    pub average_games: f64,
    pub median_games: f64,
    pub max_games: u64,
    pub min_games: u64,
}

impl ExplorationSummary {
    /// Summarize a games-played sample. `None` for an empty sample.
    pub fn from_games(games: &[u64]) -> Option<Self> {
        let max_games = *games.iter().max()?;
        let min_games = *games.iter().min()?;
        let as_f64: Vec<f64> = games.iter().map(|&g| g as f64).collect();
        Some(Self {
            pairs: games.len(),
            average_games: mean(&as_f64),
            median_games: upper_median(&as_f64).unwrap_or_default(),
            max_games,
            min_games,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateActionCount {
    pub key: String,
    pub actions: usize,
}

/// Win rates of every action with recorded weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinRateDistribution {
    pub rated_actions: usize,
    pub mean: f64,
    pub median: f64,
    pub high_count: usize,
    pub high_share: f64,
    pub low_count: usize,
    pub low_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyOverview {
    pub states: usize,
    pub total_games: u64,
    pub opening_state: String,
    pub opening_moves_available: usize,
    /// Opening actions with weight, best first.
    pub ranked_openings: Vec<RankedMove>,
    pub exploration: Option<ExplorationSummary>,
    pub most_actions: Vec<StateActionCount>,
    pub fewest_actions: Vec<StateActionCount>,
    pub win_rates: WinRateDistribution,
}

/// Build the overview report.
///
/// `high` and `low` are the win-rate cut-offs for the imbalance shares;
/// `list_len` bounds the most/fewest-actions lists.
///
/// # Errors
///
/// Returns [`crate::Error::EmptyPolicy`] if the policy has no states.
pub fn overview(
    document: &PolicyDocument,
    high: f64,
    low: f64,
    list_len: usize,
) -> Result<PolicyOverview> {
    let database = &document.database;
    let opening = database.opening_state()?;

    let mut ranked_openings: Vec<RankedMove> = opening
        .actions
        .iter()
        .filter(|(_, stats)| stats.total_weight > 0.0)
        .map(|(key, stats)| RankedMove::new(key, stats))
        .collect();
    ranked_openings.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));

    let games: Vec<u64> = database.actions().map(|(_, _, s)| s.games_played).collect();
    let win_rates: Vec<f64> = database
        .actions()
        .filter(|(_, _, s)| s.total_weight > 0.0)
        .map(|(_, _, s)| s.win_rate())
        .collect();

    let mut by_actions: Vec<StateActionCount> = database
        .entries()
        .map(|entry| StateActionCount {
            key: entry.key.clone(),
            actions: entry.actions.len(),
        })
        .collect();
    by_actions.sort_by(|a, b| b.actions.cmp(&a.actions));
    let most_actions = by_actions.iter().take(list_len).cloned().collect();
    let fewest_actions = by_actions
        .iter()
        .skip(by_actions.len().saturating_sub(list_len))
        .cloned()
        .collect();

    let high_count = win_rates.iter().filter(|&&wr| wr > high).count();
    let low_count = win_rates.iter().filter(|&&wr| wr < low).count();
    let rated = win_rates.len() as f64;

    Ok(PolicyOverview {
        states: database.len(),
        total_games: document.total_games_played,
        opening_state: opening.key.clone(),
        opening_moves_available: opening.actions.len(),
        ranked_openings,
        exploration: ExplorationSummary::from_games(&games),
        most_actions,
        fewest_actions,
        win_rates: WinRateDistribution {
            rated_actions: win_rates.len(),
            mean: mean(&win_rates),
            median: upper_median(&win_rates).unwrap_or_default(),
            high_count,
            high_share: ratio(high_count as f64, rated),
            low_count,
            low_share: ratio(low_count as f64, rated),
        },
    })
}
