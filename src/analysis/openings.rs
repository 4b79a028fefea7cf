//! Spatial and tile-value analysis of the opening moves

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::stats::{mean, population_std_dev};
use crate::{
    Result,
    board::{ChainSet, HexBoardGeometry, HexIndexing},
    policy::PolicyDatabase,
};

/// An opening move placed on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningMove {
    pub key: String,
    pub tile: u32,
    pub hex: usize,
    pub row: u8,
    pub col: u8,
    pub distance: f64,
    pub win_rate: f64,
    pub games_played: u64,
    pub wins: f64,
    pub losses: f64,
    pub p1_chains: BTreeSet<usize>,
    pub p2_chains: BTreeSet<usize>,
}

/// Moves sharing one attribute (row, column, tile or hex).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub value: u32,
    pub count: usize,
    pub average_win_rate: f64,
    pub total_games: u64,
    pub best: String,
    pub best_win_rate: f64,
    pub worst: String,
    pub worst_win_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TileVerdict {
    AboveAverage,
    Average,
    BelowAverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TileEffect {
    /// High-vs-low difference under 0.03.
    Negligible,
    /// Under 0.05.
    Minor,
    Significant,
}

impl TileEffect {
    pub fn from_difference(difference: f64) -> Self {
        let difference = difference.abs();
        if difference < 0.03 {
            TileEffect::Negligible
        } else if difference < 0.05 {
            TileEffect::Minor
        } else {
            TileEffect::Significant
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileRanking {
    pub tile: u32,
    pub average_win_rate: f64,
    pub total_games: u64,
    pub verdict: TileVerdict,
}

/// Does the tile number of an opening matter?
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileValueReport {
    /// Best tile first.
    pub rankings: Vec<TileRanking>,
    pub mean: f64,
    pub std_dev: f64,
    /// Tiles 1-3.
    pub low_band: f64,
    /// Tiles 4-6.
    pub mid_band: f64,
    /// Tiles 7-9.
    pub high_band: f64,
    pub effect: TileEffect,
    /// Largest minus smallest per-tile average.
    pub max_difference: f64,
}

/// Coarse distance class of a hex from a reference hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum DistanceBand {
    /// Distance at most 1.5.
    Adjacent,
    /// Over 1.5, at most 3.0.
    Medium,
    Far,
}

impl DistanceBand {
    pub const ALL: [DistanceBand; 3] = [DistanceBand::Adjacent, DistanceBand::Medium, DistanceBand::Far];

    pub fn from_distance(distance: f64) -> Self {
        if distance <= 1.5 {
            DistanceBand::Adjacent
        } else if distance <= 3.0 {
            DistanceBand::Medium
        } else {
            DistanceBand::Far
        }
    }
}

/// Opening moves in one distance band from the centre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceBucket {
    pub band: DistanceBand,
    pub count: usize,
    pub average_win_rate: f64,
    pub total_games: u64,
}

/// Opening moves on hexes adjacent to the centre that fall on one chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainAggregate {
    pub player: u8,
    pub chain: usize,
    pub hexes: Vec<usize>,
    pub average_win_rate: f64,
    pub total_games: u64,
    pub best: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningReport {
    pub state: String,
    /// Best first.
    pub moves: Vec<OpeningMove>,
    pub by_row: Vec<GroupSummary>,
    pub by_col: Vec<GroupSummary>,
    pub by_tile: Vec<GroupSummary>,
    pub by_hex: Vec<GroupSummary>,
    /// Non-empty bands only, nearest first.
    pub by_distance: Vec<DistanceBucket>,
    pub tile_value: Option<TileValueReport>,
    pub chains: Vec<ChainAggregate>,
}

/// Place each opening move on the board, best first.
///
/// Move keys in a policy table use 0-based board indices.
///
/// # Errors
///
/// Returns an error if a move key does not decode or names a hex outside
/// the board.
pub fn opening_moves(
    database: &PolicyDatabase,
    geometry: &HexBoardGeometry,
) -> Result<(String, Vec<OpeningMove>)> {
    let opening = database.opening_state()?;
    let p1 = ChainSet::player1();
    let p2 = ChainSet::player2();

    let mut moves = Vec::with_capacity(opening.actions.len());
    for (mv, stats) in opening.moves()? {
        let hex = mv.board_hex(HexIndexing::ZeroBased)?;
        let coord = geometry.coords(hex);
        moves.push(OpeningMove {
            key: mv.encode(),
            tile: mv.tile,
            hex: hex.index(),
            row: coord.row,
            col: coord.col,
            distance: geometry.distance(hex, geometry.center()),
            win_rate: stats.win_rate(),
            games_played: stats.games_played,
            wins: stats.wins,
            losses: stats.losses,
            p1_chains: p1.containing(hex.index()),
            p2_chains: p2.containing(hex.index()),
        });
    }
    moves.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));
    Ok((opening.key.clone(), moves))
}

/// Full opening analysis over the first state of the policy.
///
/// # Errors
///
/// See [`opening_moves`].
pub fn opening_analysis(
    database: &PolicyDatabase,
    geometry: &HexBoardGeometry,
) -> Result<OpeningReport> {
    let (state, moves) = opening_moves(database, geometry)?;

    let by_row = group_by(&moves, |m| u32::from(m.row));
    let by_col = group_by(&moves, |m| u32::from(m.col));
    let by_tile = group_by(&moves, |m| m.tile);
    let by_hex = group_by(&moves, |m| m.hex as u32);
    let by_distance = distance_buckets(&moves);
    let tile_value = tile_value(&by_tile);

    let adjacent: Vec<usize> = geometry
        .neighbors(geometry.center())
        .into_iter()
        .map(|h| h.index())
        .collect();
    let mut chains = chain_aggregates(1, &ChainSet::player1(), &adjacent, &moves);
    chains.extend(chain_aggregates(2, &ChainSet::player2(), &adjacent, &moves));

    Ok(OpeningReport {
        state,
        moves,
        by_row,
        by_col,
        by_tile,
        by_hex,
        by_distance,
        tile_value,
        chains,
    })
}

fn group_by(moves: &[OpeningMove], key: impl Fn(&OpeningMove) -> u32) -> Vec<GroupSummary> {
    let mut groups: BTreeMap<u32, Vec<&OpeningMove>> = BTreeMap::new();
    for m in moves {
        groups.entry(key(m)).or_default().push(m);
    }

    groups
        .into_iter()
        .filter_map(|(value, members)| {
            let best = members.iter().max_by(|a, b| a.win_rate.total_cmp(&b.win_rate))?;
            let worst = members.iter().min_by(|a, b| a.win_rate.total_cmp(&b.win_rate))?;
            let rates: Vec<f64> = members.iter().map(|m| m.win_rate).collect();
            Some(GroupSummary {
                value,
                count: members.len(),
                average_win_rate: mean(&rates),
                total_games: members.iter().map(|m| m.games_played).sum(),
                best: best.key.clone(),
                best_win_rate: best.win_rate,
                worst: worst.key.clone(),
                worst_win_rate: worst.win_rate,
            })
        })
        .collect()
}

fn distance_buckets(moves: &[OpeningMove]) -> Vec<DistanceBucket> {
    DistanceBand::ALL
        .into_iter()
        .filter_map(|band| {
            let members: Vec<&OpeningMove> = moves
                .iter()
                .filter(|m| DistanceBand::from_distance(m.distance) == band)
                .collect();
            if members.is_empty() {
                return None;
            }
            let rates: Vec<f64> = members.iter().map(|m| m.win_rate).collect();
            Some(DistanceBucket {
                band,
                count: members.len(),
                average_win_rate: mean(&rates),
                total_games: members.iter().map(|m| m.games_played).sum(),
            })
        })
        .collect()
}

fn tile_value(by_tile: &[GroupSummary]) -> Option<TileValueReport> {
    if by_tile.is_empty() {
        return None;
    }

    let averages: Vec<f64> = by_tile.iter().map(|g| g.average_win_rate).collect();
    let mean_rate = mean(&averages);
    let std_dev = population_std_dev(&averages);

    let mut rankings: Vec<TileRanking> = by_tile
        .iter()
        .map(|g| {
            let verdict = if (g.average_win_rate - mean_rate).abs() < std_dev * 0.5 {
                TileVerdict::Average
            } else if g.average_win_rate > mean_rate {
                TileVerdict::AboveAverage
            } else {
                TileVerdict::BelowAverage
            };
            TileRanking {
                tile: g.value,
                average_win_rate: g.average_win_rate,
                total_games: g.total_games,
                verdict,
            }
        })
        .collect();
    rankings.sort_by(|a, b| b.average_win_rate.total_cmp(&a.average_win_rate));

    let band = |range: std::ops::RangeInclusive<u32>| {
        let rates: Vec<f64> = by_tile
            .iter()
            .filter(|g| range.contains(&g.value))
            .map(|g| g.average_win_rate)
            .collect();
        mean(&rates)
    };
    let low_band = band(1..=3);
    let mid_band = band(4..=6);
    let high_band = band(7..=9);

    let max = averages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = averages.iter().copied().fold(f64::INFINITY, f64::min);

    Some(TileValueReport {
        rankings,
        mean: mean_rate,
        std_dev,
        low_band,
        mid_band,
        high_band,
        effect: TileEffect::from_difference(high_band - low_band),
        max_difference: max - min,
    })
}

fn chain_aggregates(
    player: u8,
    chains: &ChainSet,
    adjacent: &[usize],
    moves: &[OpeningMove],
) -> Vec<ChainAggregate> {
    chains
        .chains()
        .iter()
        .enumerate()
        .filter_map(|(i, chain)| {
            let hexes: Vec<usize> = adjacent
                .iter()
                .copied()
                .filter(|h| chain.contains(h))
                .collect();
            let members: Vec<&OpeningMove> =
                moves.iter().filter(|m| hexes.contains(&m.hex)).collect();
            let best = members.iter().max_by(|a, b| a.win_rate.total_cmp(&b.win_rate))?;
            let rates: Vec<f64> = members.iter().map(|m| m.win_rate).collect();
            Some(ChainAggregate {
                player,
                chain: i + 1,
                hexes,
                average_win_rate: mean(&rates),
                total_games: members.iter().map(|m| m.games_played).sum(),
                best: best.key.clone(),
            })
        })
        .collect()
}
