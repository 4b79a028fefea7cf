//! Which first moves did player 1 actually play?
//!
//! Reconstructed from turn-2 states, where the board holds the neutral centre
//! tile and exactly one player-1 tile.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::stats::ratio;
use crate::{
    Result,
    board::{HexIndexing, MoveKey, Owner},
    policy::PolicyDatabase,
    types::HexId,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningFrequency {
    pub key: String,
    pub count: usize,
    /// Fraction of all turn-2 states.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiversityReport {
    pub indexing: HexIndexing,
    pub turn_two_states: usize,
    /// Turn-2 states holding exactly one player-1 tile.
    pub opening_only_states: usize,
    /// Most frequent first.
    pub frequencies: Vec<OpeningFrequency>,
    /// Distinct `h` numbers under `indexing`.
    pub distinct_hexes: BTreeSet<u32>,
}

/// Count player 1's opening moves.
///
/// `indexing` decides how board indices are written back into move keys; the
/// training tools have used both conventions.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedStateKey`] if a state key fails to decode.
pub fn opening_diversity(
    database: &PolicyDatabase,
    indexing: HexIndexing,
) -> Result<DiversityReport> {
    let mut turn_two_states = 0;
    let mut opening_only_states = 0;
    let mut counts: HashMap<MoveKey, usize> = HashMap::new();

    for entry in database.entries() {
        let state = entry.state()?;
        if state.turn != 2 {
            continue;
        }
        turn_two_states += 1;

        let tiles: Vec<(usize, u8)> = state
            .tiles_of(Owner::Player1)
            .filter(|(index, _)| *index != HexId::CENTER.index())
            .collect();
        if let [(index, value)] = tiles.as_slice() {
            opening_only_states += 1;
            let key = MoveKey::from_board_index(u32::from(*value), *index, indexing);
            *counts.entry(key).or_insert(0) += 1;
        }
    }

    let distinct_hexes = counts.keys().map(|k| k.hex).collect();
    let mut frequencies: Vec<OpeningFrequency> = counts
        .into_iter()
        .map(|(key, count)| OpeningFrequency {
            key: key.encode(),
            count,
            share: ratio(count as f64, turn_two_states as f64),
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));

    Ok(DiversityReport {
        indexing,
        turn_two_states,
        opening_only_states,
        frequencies,
        distinct_hexes,
    })
}
