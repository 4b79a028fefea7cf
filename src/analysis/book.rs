//! Opening book ranking and position-versus-tile comparison

use std::collections::BTreeMap;

use serde::Serialize;

use super::stats::mean;
use crate::{Result, policy::OpeningBook};

/// Number of openings above the top-tier cut-off.
const TOP_TIER_RANK: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookOpening {
    pub key: String,
    pub tile: u32,
    pub hex: u32,
    pub games: u64,
    pub wins: f64,
    pub losses: f64,
    pub ties: f64,
    pub win_rate: f64,
}

/// Openings sharing a hex or a tile value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookGroup {
    pub value: u32,
    pub count: usize,
    pub average_win_rate: f64,
    pub total_games: u64,
    pub total_wins: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DominantFactor {
    Position,
    TileValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookReport {
    pub total_games: u64,
    pub games_per_opening: u64,
    pub minimax_threshold: Option<u32>,
    /// Best first.
    pub ranked: Vec<BookOpening>,
    pub average_win_rate: f64,
    pub best_win_rate: f64,
    pub worst_win_rate: f64,
    /// Best first.
    pub by_hex: Vec<BookGroup>,
    /// Best first.
    pub by_tile: Vec<BookGroup>,
    pub hex_spread: f64,
    pub tile_spread: f64,
    pub dominant: DominantFactor,
    pub top_tier_threshold: Option<f64>,
    pub top_tier: Vec<String>,
}

impl BookReport {
    pub fn spread(&self) -> f64 {
        self.best_win_rate - self.worst_win_rate
    }
}

fn group(openings: &[BookOpening], key: impl Fn(&BookOpening) -> u32) -> Vec<BookGroup> {
    let mut groups: BTreeMap<u32, Vec<&BookOpening>> = BTreeMap::new();
    for opening in openings {
        groups.entry(key(opening)).or_default().push(opening);
    }
    let mut summaries: Vec<BookGroup> = groups
        .into_iter()
        .map(|(value, members)| {
            let rates: Vec<f64> = members.iter().map(|o| o.win_rate).collect();
            BookGroup {
                value,
                count: members.len(),
                average_win_rate: mean(&rates),
                total_games: members.iter().map(|o| o.games).sum(),
                total_wins: members.iter().map(|o| o.wins).sum(),
            }
        })
        .collect();
    summaries.sort_by(|a, b| b.average_win_rate.total_cmp(&a.average_win_rate));
    summaries
}

fn spread(groups: &[BookGroup]) -> f64 {
    let max = groups.iter().map(|g| g.average_win_rate).fold(f64::NEG_INFINITY, f64::max);
    let min = groups.iter().map(|g| g.average_win_rate).fold(f64::INFINITY, f64::min);
    if groups.is_empty() { 0.0 } else { max - min }
}

/// Rank an opening book and compare position against tile value.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedMoveKey`] if an opening lacks an explicit
/// tile or hex and its key does not decode.
pub fn book_analysis(book: &OpeningBook) -> Result<BookReport> {
    let mut ranked: Vec<BookOpening> = book
        .openings()?
        .into_iter()
        .map(|opening| BookOpening {
            key: opening.key.to_string(),
            tile: opening.tile,
            hex: opening.hex,
            games: opening.record.games,
            wins: opening.record.wins,
            losses: opening.record.losses,
            ties: opening.record.ties,
            win_rate: opening.win_rate(),
        })
        .collect();
    ranked.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));

    let rates: Vec<f64> = ranked.iter().map(|o| o.win_rate).collect();
    let by_hex = group(&ranked, |o| o.hex);
    let by_tile = group(&ranked, |o| o.tile);
    let hex_spread = spread(&by_hex);
    let tile_spread = spread(&by_tile);

    // small books put everything in the top tier
    let top_tier_threshold = ranked
        .get(TOP_TIER_RANK)
        .or_else(|| ranked.last())
        .map(|o| o.win_rate);
    let top_tier = match top_tier_threshold {
        Some(threshold) => ranked
            .iter()
            .filter(|o| o.win_rate >= threshold)
            .map(|o| o.key.clone())
            .collect(),
        None => Vec::new(),
    };

    Ok(BookReport {
        total_games: book.total_games,
        games_per_opening: book.games_per_opening,
        minimax_threshold: book.minimax_threshold,
        average_win_rate: mean(&rates),
        best_win_rate: rates.first().copied().unwrap_or_default(),
        worst_win_rate: rates.last().copied().unwrap_or_default(),
        ranked,
        by_hex,
        by_tile,
        hex_spread,
        tile_spread,
        dominant: if hex_spread > tile_spread {
            DominantFactor::Position
        } else {
            DominantFactor::TileValue
        },
        top_tier_threshold,
        top_tier,
    })
}
