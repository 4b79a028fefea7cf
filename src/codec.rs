//! Policy codec: the key encodings and the derived computations every
//! analysis builds on.
//!
//! These are thin free-function entry points over the board and policy types,
//! so callers can work with raw strings without reaching into submodules.

use std::collections::BTreeSet;

use crate::{
    Result,
    board::{Cell, ChainSet, HexBoardGeometry, MoveKey, StateKey},
    policy::{ActionStats, MoveSource},
    types::HexId,
};

/// Decode a pipe-delimited state key.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedStateKey`] for keys outside the grammar.
pub fn decode_state_key(raw: &str) -> Result<StateKey> {
    StateKey::decode(raw)
}

pub fn encode_state_key(state: &StateKey) -> String {
    state.encode()
}

/// Decode a `t<tile>h<hex>` move key.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedMoveKey`] unless the input matches exactly.
pub fn decode_move_key(raw: &str) -> Result<MoveKey> {
    MoveKey::decode(raw)
}

pub fn count_occupied(board: &[Cell]) -> usize {
    crate::board::count_occupied(board)
}

pub fn classify_weight(stats: &ActionStats) -> MoveSource {
    stats.classify()
}

pub fn chains_containing(hex: usize, chains: &ChainSet) -> BTreeSet<usize> {
    chains.containing(hex)
}

pub fn hex_distance(a: HexId, b: HexId, geometry: &HexBoardGeometry) -> f64 {
    geometry.distance(a, b)
}

/// Mean win rate of moves landing on `hex_a` minus that of moves landing on
/// `hex_b`, within a single state's actions.
///
/// Hexes are compared by the raw `h` number of the move keys. If either hex
/// has no recorded moves the score is 0: the pair is treated as symmetric for
/// lack of evidence, not because it was shown to be.
pub fn symmetry_score(hex_a: u32, hex_b: u32, moves: &[(MoveKey, &ActionStats)]) -> f64 {
    match (mean_win_rate(hex_a, moves), mean_win_rate(hex_b, moves)) {
        (Some(a), Some(b)) => a - b,
        _ => 0.0,
    }
}

/// Mean per-move win rate over moves landing on `hex`.
pub fn mean_win_rate(hex: u32, moves: &[(MoveKey, &ActionStats)]) -> Option<f64> {
    let rates: Vec<f64> = moves
        .iter()
        .filter(|(mv, _)| mv.hex == hex)
        .map(|(_, stats)| stats.win_rate())
        .collect();
    if rates.is_empty() {
        None
    } else {
        Some(rates.iter().sum::<f64>() / rates.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total_weight: f64, wins: f64) -> ActionStats {
        ActionStats {
            games_played: total_weight as u64,
            total_weight,
            wins,
            losses: total_weight - wins,
            ties: 0.0,
        }
    }

    #[test]
    fn test_symmetry_score_difference() {
        let a1 = stats(10.0, 8.0);
        let a2 = stats(10.0, 6.0);
        let b1 = stats(10.0, 5.0);
        let moves = vec![
            (MoveKey::new(1, 7), &a1),
            (MoveKey::new(2, 7), &a2),
            (MoveKey::new(1, 11), &b1),
        ];
        // hex 7 averages 0.7, hex 11 averages 0.5
        assert!((symmetry_score(7, 11, &moves) - 0.2).abs() < 1e-12);
        assert!((symmetry_score(11, 7, &moves) + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_symmetry_score_missing_side_is_zero() {
        let a = stats(10.0, 9.0);
        let moves = vec![(MoveKey::new(1, 7), &a)];
        assert_eq!(symmetry_score(7, 11, &moves), 0.0);
        assert_eq!(symmetry_score(4, 14, &[]), 0.0);
    }

    #[test]
    fn test_codec_entry_points() {
        assert_eq!(decode_move_key("t3h14").unwrap(), MoveKey::new(3, 14));
        let state = decode_state_key(
            "1|null,null,null,null,null,null,null,null,null,1p0,null,null,null,null,null,null,null,null,null|p1a:123456789|p2a:123456789|p1u:|p2u:",
        )
        .unwrap();
        assert_eq!(count_occupied(&state.board), 1);
        assert_eq!(chains_containing(7, &ChainSet::player1()), BTreeSet::from([2]));
        let center = HexId::CENTER;
        assert_eq!(hex_distance(center, center, &HexBoardGeometry::standard()), 0.0);
    }
}
