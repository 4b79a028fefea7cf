//! Point-symmetry check of the opening moves around the centre hex

use serde::Serialize;

use super::chain_audit::{ChainAudit, audit_chains};
use crate::{
    Result,
    board::{ChainSet, HexBoardGeometry, MoveKey, Reflection},
    codec::{mean_win_rate, symmetry_score},
    policy::{ActionStats, PolicyDatabase},
    types::HexId,
};

/// Two hexes that mirror each other through the centre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymmetryPair {
    pub first: HexId,
    pub second: HexId,
    pub first_win_rate: Option<f64>,
    pub second_win_rate: Option<f64>,
    pub first_games: u64,
    pub second_games: u64,
    /// First minus second mean win rate; 0 when either side is missing.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymmetryReport {
    pub state: String,
    pub pairs: Vec<SymmetryPair>,
    pub chain_audit: ChainAudit,
}

/// Pairs of centre-adjacent hexes related by point reflection, lower index
/// first.
pub fn symmetric_pairs(geometry: &HexBoardGeometry) -> Vec<(HexId, HexId)> {
    geometry
        .neighbors(geometry.center())
        .into_iter()
        .filter_map(|hex| {
            let mirror = geometry.reflect(hex, Reflection::Point)?;
            (hex < mirror).then_some((hex, mirror))
        })
        .collect()
}

fn games_on(hex: u32, moves: &[(MoveKey, &ActionStats)]) -> u64 {
    moves
        .iter()
        .filter(|(mv, _)| mv.hex == hex)
        .map(|(_, stats)| stats.games_played)
        .sum()
}

/// Compare the opening win rates of mirrored hex pairs.
///
/// # Errors
///
/// Returns an error if the policy is empty or an opening move key does not
/// decode.
pub fn symmetry_analysis(
    database: &PolicyDatabase,
    geometry: &HexBoardGeometry,
) -> Result<SymmetryReport> {
    let opening = database.opening_state()?;
    let moves = opening.moves()?;

    let pairs = symmetric_pairs(geometry)
        .into_iter()
        .map(|(first, second)| {
            let (a, b) = (first.index() as u32, second.index() as u32);
            SymmetryPair {
                first,
                second,
                first_win_rate: mean_win_rate(a, &moves),
                second_win_rate: mean_win_rate(b, &moves),
                first_games: games_on(a, &moves),
                second_games: games_on(b, &moves),
                score: symmetry_score(a, b, &moves),
            }
        })
        .collect();

    Ok(SymmetryReport {
        state: opening.key.clone(),
        pairs,
        chain_audit: audit_chains(&ChainSet::player1(), &ChainSet::player2(), geometry),
    })
}
