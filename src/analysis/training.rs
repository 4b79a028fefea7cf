//! Training-mix analysis: how much of a policy came from random play versus
//! the endgame solver.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::stats::ratio;
use crate::{
    Result,
    policy::{MoveSource, PolicyDocument},
};

/// One move of a sampled endgame state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedMove {
    pub key: String,
    pub games_played: u64,
    pub average_weight: f64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndgameSample {
    pub key: String,
    pub empty_cells: usize,
    pub action_count: usize,
    pub moves: Vec<WeightedMove>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovesPerState {
    pub average: f64,
    pub max: usize,
    pub min: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingMix {
    pub training_method: Option<String>,
    pub created: Option<String>,
    pub random_moves: u64,
    pub solved_moves: u64,
    pub endgame_states: usize,
    /// Empty-cell count → number of endgame states.
    pub endgame_histogram: BTreeMap<usize, usize>,
    /// Emptiest-first endgame states, a handful of moves each.
    pub endgame_samples: Vec<EndgameSample>,
    pub moves_per_state: Option<MovesPerState>,
    /// Games per opening move, summed over depth-1 states, most played first.
    pub opening_coverage: Vec<(String, u64)>,
    pub states_per_game: f64,
}

impl TrainingMix {
    pub fn total_moves(&self) -> u64 {
        self.random_moves + self.solved_moves
    }

    pub fn random_share(&self) -> f64 {
        ratio(self.random_moves as f64, self.total_moves() as f64)
    }

    pub fn solved_share(&self) -> f64 {
        ratio(self.solved_moves as f64, self.total_moves() as f64)
    }
}

const SAMPLE_STATES: usize = 5;
const SAMPLE_MOVES: usize = 3;

/// Split move instances by source and profile the endgame states.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedStateKey`] if a state key fails to decode.
pub fn training_mix(
    document: &PolicyDocument,
    endgame_threshold: usize,
    solved_threshold: f64,
) -> Result<TrainingMix> {
    let database = &document.database;

    let mut random_moves = 0;
    let mut solved_moves = 0;
    for (_, _, stats) in database.actions() {
        match stats.classify_with_threshold(solved_threshold) {
            MoveSource::Random => random_moves += stats.games_played,
            MoveSource::Solved => solved_moves += stats.games_played,
        }
    }

    let mut endgames = Vec::new();
    let mut coverage: HashMap<&str, u64> = HashMap::new();
    for entry in database.entries() {
        let state = entry.state()?;
        let empty = state.empty_count();
        if empty <= endgame_threshold {
            endgames.push((entry, empty));
        }
        if state.count_occupied() == 1 {
            for (key, stats) in &entry.actions {
                *coverage.entry(key.as_str()).or_default() += stats.games_played;
            }
        }
    }

    let mut endgame_histogram = BTreeMap::new();
    for (_, empty) in &endgames {
        *endgame_histogram.entry(*empty).or_insert(0) += 1;
    }

    endgames.sort_by_key(|(_, empty)| *empty);
    let endgame_samples = endgames
        .iter()
        .take(SAMPLE_STATES)
        .map(|(entry, empty)| EndgameSample {
            key: entry.key.clone(),
            empty_cells: *empty,
            action_count: entry.actions.len(),
            moves: entry
                .actions
                .iter()
                .take(SAMPLE_MOVES)
                .map(|(key, stats)| WeightedMove {
                    key: key.clone(),
                    games_played: stats.games_played,
                    average_weight: stats.average_weight(),
                    win_rate: stats.win_rate(),
                })
                .collect(),
        })
        .collect();

    let counts: Vec<usize> = database.entries().map(|e| e.actions.len()).collect();
    let moves_per_state = match (counts.iter().max(), counts.iter().min()) {
        (Some(&max), Some(&min)) => Some(MovesPerState {
            average: counts.iter().sum::<usize>() as f64 / counts.len() as f64,
            max,
            min,
        }),
        _ => None,
    };

    let mut opening_coverage: Vec<(String, u64)> = coverage
        .into_iter()
        .map(|(key, games)| (key.to_string(), games))
        .collect();
    opening_coverage.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(TrainingMix {
        training_method: document.training_method.clone(),
        created: document.created.clone(),
        random_moves,
        solved_moves,
        endgame_states: endgames.len(),
        endgame_histogram,
        endgame_samples,
        moves_per_state,
        opening_coverage,
        states_per_game: ratio(database.len() as f64, document.total_games_played as f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::{Cell, Owner, StateKey},
        policy::{ActionStats, ActionTable, SOLVED_WEIGHT_THRESHOLD},
    };

    fn action(games: u64, weight: f64) -> ActionStats {
        ActionStats {
            games_played: games,
            total_weight: weight,
            wins: weight / 2.0,
            losses: weight / 2.0,
            ties: 0.0,
        }
    }

    /// A state with the neutral centre plus `extra` player tiles.
    fn state_with(extra: usize) -> String {
        let mut state = StateKey::decode(
            "1|null,null,null,null,null,null,null,null,null,1p0,null,null,null,null,null,null,null,null,null|p1a:123456789|p2a:123456789|p1u:|p2u:",
        )
        .unwrap();
        for index in (0..19).filter(|&i| i != 9).take(extra) {
            state.board[index] = Cell::Tile {
                value: 2,
                owner: Owner::Player1,
            };
        }
        state.encode()
    }

    fn document() -> PolicyDocument {
        let mut doc = PolicyDocument {
            total_games_played: 2,
            training_method: Some("random_minimax".into()),
            ..Default::default()
        };
        let mut opening = ActionTable::new();
        opening.insert("t1h7".into(), action(2, 2.0));
        opening.insert("t5h4".into(), action(1, 1.0));
        doc.database.insert(state_with(0), opening);

        let mut endgame = ActionTable::new();
        endgame.insert("t9h18".into(), action(3, 6.0));
        doc.database.insert(state_with(13), endgame);

        let mut late = ActionTable::new();
        late.insert("t8h17".into(), action(1, 2.0));
        doc.database.insert(state_with(15), late);
        doc
    }

    #[test]
    fn test_move_instances_split_by_weight() {
        let mix = training_mix(&document(), 6, SOLVED_WEIGHT_THRESHOLD).unwrap();
        assert_eq!(mix.random_moves, 3);
        assert_eq!(mix.solved_moves, 4);
        assert!((mix.solved_share() - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_endgame_histogram_and_samples() {
        let mix = training_mix(&document(), 6, SOLVED_WEIGHT_THRESHOLD).unwrap();
        // 13 extra tiles leave 5 empty, 15 leave 3
        assert_eq!(mix.endgame_states, 2);
        assert_eq!(mix.endgame_histogram, BTreeMap::from([(3, 1), (5, 1)]));
        assert_eq!(mix.endgame_samples[0].empty_cells, 3);
        assert_eq!(mix.endgame_samples[0].moves[0].average_weight, 2.0);
    }

    #[test]
    fn test_coverage_and_density() {
        let mix = training_mix(&document(), 6, SOLVED_WEIGHT_THRESHOLD).unwrap();
        assert_eq!(
            mix.opening_coverage,
            vec![("t1h7".to_string(), 2), ("t5h4".to_string(), 1)]
        );
        assert_eq!(mix.states_per_game, 1.5);
        let per_state = mix.moves_per_state.unwrap();
        assert_eq!((per_state.max, per_state.min), (2, 1));
    }

    #[test]
    fn test_samples_show_moves_in_table_order() {
        let mut doc = PolicyDocument::default();
        let mut endgame = ActionTable::new();
        for key in ["t9h18", "t5h17", "t3h16", "t2h13"] {
            endgame.insert(key.into(), action(1, 2.0));
        }
        doc.database.insert(state_with(14), endgame);

        let mix = training_mix(&doc, 6, SOLVED_WEIGHT_THRESHOLD).unwrap();
        let shown: Vec<&str> = mix.endgame_samples[0]
            .moves
            .iter()
            .map(|m| m.key.as_str())
            .collect();
        assert_eq!(shown, ["t9h18", "t5h17", "t3h16"]);
    }

    #[test]
    fn test_custom_threshold_reclassifies() {
        let mix = training_mix(&document(), 6, 2.5).unwrap();
        assert_eq!(mix.solved_moves, 0);
        assert_eq!(mix.random_moves, 7);
    }
}
