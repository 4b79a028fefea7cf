//! Exploration by move depth
//!
//! Depth is the number of occupied cells, so the opening state (neutral tile
//! only) sits at depth 1.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{
    overview::{ExplorationSummary, RankedMove},
    stats::{mean, normalized_entropy},
};
use crate::{
    Result,
    policy::{PolicyDatabase, StateEntry},
};

/// One heavily explored state and how its games are spread over actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExploredState {
    pub key: String,
    pub total_games: u64,
    /// Actions ordered by games played, most first.
    pub actions: Vec<RankedMove>,
    pub max_games: u64,
    pub min_games: u64,
    pub average_games: f64,
    /// max / min games, absent when some action was never played.
    pub exploration_ratio: Option<f64>,
    /// Normalized entropy of the games distribution (1.0 = uniform).
    pub diversity: f64,
}

impl ExploredState {
    fn from_entry(entry: &StateEntry) -> Self {
        let mut actions: Vec<RankedMove> = entry
            .actions
            .iter()
            .map(|(key, stats)| RankedMove::new(key, stats))
            .collect();
        actions.sort_by(|a, b| b.games_played.cmp(&a.games_played));

        let games: Vec<u64> = entry.actions.values().map(|a| a.games_played).collect();
        let max_games = games.iter().copied().max().unwrap_or_default();
        let min_games = games.iter().copied().min().unwrap_or_default();
        let as_f64: Vec<f64> = games.iter().map(|&g| g as f64).collect();

        Self {
            key: entry.key.clone(),
            total_games: games.iter().sum(),
            actions,
            max_games,
            min_games,
            average_games: mean(&as_f64),
            exploration_ratio: (min_games > 0).then(|| max_games as f64 / min_games as f64),
            diversity: normalized_entropy(&games),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthLevel {
    pub depth: usize,
    pub state_count: usize,
    pub top_states: Vec<ExploredState>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthReport {
    /// Occupied-cell count → number of states.
    pub states_by_depth: BTreeMap<usize, usize>,
    /// Levels 1..=limit, including empty ones.
    pub levels: Vec<DepthLevel>,
    /// Games-per-action over every action at depths 1..=limit.
    pub summary: Option<ExplorationSummary>,
}

/// Group states by depth and describe exploration at the shallow levels.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedStateKey`] if any state key fails to
/// decode.
pub fn depth_analysis(
    database: &PolicyDatabase,
    limit: usize,
    states_per_depth: usize,
) -> Result<DepthReport> {
    let mut by_depth: BTreeMap<usize, Vec<&StateEntry>> = BTreeMap::new();
    for entry in database.entries() {
        let depth = entry.state()?.count_occupied();
        by_depth.entry(depth).or_default().push(entry);
    }

    let mut levels = Vec::with_capacity(limit);
    let mut shallow_games = Vec::new();
    for depth in 1..=limit {
        let entries = by_depth.get(&depth).map(Vec::as_slice).unwrap_or_default();
        shallow_games.extend(
            entries
                .iter()
                .flat_map(|e| e.actions.values().map(|a| a.games_played)),
        );

        let mut ranked: Vec<&StateEntry> = entries.to_vec();
        ranked.sort_by_key(|e| std::cmp::Reverse(e.total_games()));
        levels.push(DepthLevel {
            depth,
            state_count: entries.len(),
            top_states: ranked
                .into_iter()
                .take(states_per_depth)
                .map(ExploredState::from_entry)
                .collect(),
        });
    }
    log::debug!("grouped {} states into {} depths", database.len(), by_depth.len());

    Ok(DepthReport {
        states_by_depth: by_depth.iter().map(|(d, e)| (*d, e.len())).collect(),
        levels,
        summary: ExplorationSummary::from_games(&shallow_games),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{ActionStats, ActionTable};

    const OPENING: &str = "1|null,null,null,null,null,null,null,null,null,1p0,null,null,null,null,null,null,null,null,null|p1a:123456789|p2a:123456789|p1u:|p2u:";
    const AFTER_T1H7: &str = "2|null,null,null,null,null,null,null,1p1,null,1p0,null,null,null,null,null,null,null,null,null|p1a:23456789|p2a:123456789|p1u:7|p2u:";
    const AFTER_T2H4: &str = "2|null,null,null,null,2p1,null,null,null,null,1p0,null,null,null,null,null,null,null,null,null|p1a:13456789|p2a:123456789|p1u:4|p2u:";

    fn table(games: &[(&str, u64)]) -> ActionTable {
        games
            .iter()
            .map(|(key, g)| {
                (
                    key.to_string(),
                    ActionStats {
                        games_played: *g,
                        total_weight: *g as f64,
                        wins: *g as f64 / 2.0,
                        losses: *g as f64 / 2.0,
                        ties: 0.0,
                    },
                )
            })
            .collect()
    }

    fn database() -> PolicyDatabase {
        let mut db = PolicyDatabase::new();
        db.insert(OPENING, table(&[("t1h7", 30), ("t2h4", 10)]));
        db.insert(AFTER_T1H7, table(&[("t1h10", 20), ("t3h14", 0)]));
        db.insert(AFTER_T2H4, table(&[("t1h10", 5), ("t2h14", 5)]));
        db
    }

    #[test]
    fn test_states_grouped_by_occupied_cells() {
        let report = depth_analysis(&database(), 4, 3).unwrap();
        assert_eq!(report.states_by_depth.get(&1), Some(&1));
        assert_eq!(report.states_by_depth.get(&2), Some(&2));
        assert_eq!(report.levels.len(), 4);
        assert_eq!(report.levels[2].state_count, 0);
        assert!(report.levels[3].top_states.is_empty());
    }

    #[test]
    fn test_top_states_ranked_by_games() {
        let report = depth_analysis(&database(), 2, 1).unwrap();
        let level = &report.levels[1];
        assert_eq!(level.top_states.len(), 1);
        let top = &level.top_states[0];
        assert_eq!(top.key, AFTER_T1H7);
        assert_eq!(top.actions[0].key, "t1h10");
        assert_eq!(top.exploration_ratio, None);
        assert_eq!(top.diversity, 0.0);
    }

    #[test]
    fn test_uniform_state_has_full_diversity() {
        let report = depth_analysis(&database(), 2, 3).unwrap();
        let uniform = report.levels[1]
            .top_states
            .iter()
            .find(|s| s.key == AFTER_T2H4)
            .unwrap();
        assert_eq!(uniform.exploration_ratio, Some(1.0));
        assert!((uniform.diversity - 1.0).abs() < 1e-12);
        assert_eq!(report.summary.unwrap().pairs, 6);
    }
}
