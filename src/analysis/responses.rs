//! Second-move analysis: how the opponent answered one opening move

use serde::Serialize;

use super::{openings::DistanceBand, stats::mean};
use crate::{
    Error, Result,
    board::{Cell, HexBoardGeometry, HexIndexing, MoveKey, Owner},
    policy::{PolicyDatabase, StateEntry},
    types::HexId,
};

/// Where a reply lands relative to the two tiles already on the board.
///
/// A reply can be both attacking and defending when it sits next to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseStance {
    /// Adjacent-band distance to the opening tile.
    Attacking,
    /// Adjacent-band distance to the neutral tile.
    Defending,
    /// Neither.
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub key: String,
    pub tile: u32,
    pub hex: usize,
    pub win_rate: f64,
    pub games_played: u64,
    pub distance_to_opening: f64,
    pub distance_to_neutral: f64,
}

impl Reply {
    pub fn is_attacking(&self) -> bool {
        DistanceBand::from_distance(self.distance_to_opening) == DistanceBand::Adjacent
    }

    pub fn is_defending(&self) -> bool {
        DistanceBand::from_distance(self.distance_to_neutral) == DistanceBand::Adjacent
    }

    pub fn has_stance(&self, stance: ResponseStance) -> bool {
        match stance {
            ResponseStance::Attacking => self.is_attacking(),
            ResponseStance::Defending => self.is_defending(),
            ResponseStance::Neutral => !self.is_attacking() && !self.is_defending(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StanceSummary {
    pub stance: ResponseStance,
    pub count: usize,
    pub average_win_rate: f64,
    pub total_games: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseReport {
    pub opening: String,
    pub opening_hex: usize,
    pub neutral_hex: usize,
    /// The position the opening move leads to.
    pub state: String,
    /// Best first.
    pub replies: Vec<Reply>,
    /// Non-empty stances only.
    pub stances: Vec<StanceSummary>,
}

/// First state in file order whose board is the opening board plus player 1's
/// `opening` tile.
///
/// # Errors
///
/// Returns an error if the policy is empty, a state key fails to decode, the
/// move does not fit the board, or no such state was recorded.
pub fn successor_state<'a>(
    database: &'a PolicyDatabase,
    opening: &MoveKey,
) -> Result<&'a StateEntry> {
    let start = database.opening_state()?.state()?;
    let hex = opening.board_hex(HexIndexing::ZeroBased)?;
    let value = u8::try_from(opening.tile)
        .ok()
        .filter(|v| (1..=9).contains(v))
        .ok_or(Error::InvalidTile {
            value: opening.tile,
        })?;

    let mut expected = start.board;
    expected[hex.index()] = Cell::Tile {
        value,
        owner: Owner::Player1,
    };

    for entry in database.entries() {
        if entry.state()?.board == expected {
            return Ok(entry);
        }
    }
    Err(Error::NoSuccessor {
        opening: opening.encode(),
    })
}

/// Rank the replies to `opening` and classify where they land.
///
/// # Errors
///
/// Returns [`Error::MalformedMoveKey`] for a bad opening or reply key, and
/// [`Error::NoSuccessor`] if the policy never reached the position.
pub fn response_analysis(
    database: &PolicyDatabase,
    geometry: &HexBoardGeometry,
    opening: &str,
) -> Result<ResponseReport> {
    let opening_move = MoveKey::decode(opening)?;
    let opening_hex = opening_move.board_hex(HexIndexing::ZeroBased)?;
    let entry = successor_state(database, &opening_move)?;
    let state = entry.state()?;
    let neutral_hex = match state.neutral_hex() {
        Some(index) => HexId::new(index)?,
        None => geometry.center(),
    };

    let mut replies = Vec::with_capacity(entry.actions.len());
    for (mv, stats) in entry.moves()? {
        let hex = mv.board_hex(HexIndexing::ZeroBased)?;
        replies.push(Reply {
            key: mv.encode(),
            tile: mv.tile,
            hex: hex.index(),
            win_rate: stats.win_rate(),
            games_played: stats.games_played,
            distance_to_opening: geometry.distance(hex, opening_hex),
            distance_to_neutral: geometry.distance(hex, neutral_hex),
        });
    }
    replies.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));

    let stances = [
        ResponseStance::Attacking,
        ResponseStance::Defending,
        ResponseStance::Neutral,
    ]
    .into_iter()
    .filter_map(|stance| {
        let members: Vec<&Reply> = replies.iter().filter(|r| r.has_stance(stance)).collect();
        if members.is_empty() {
            return None;
        }
        let rates: Vec<f64> = members.iter().map(|r| r.win_rate).collect();
        Some(StanceSummary {
            stance,
            count: members.len(),
            average_win_rate: mean(&rates),
            total_games: members.iter().map(|r| r.games_played).sum(),
        })
    })
    .collect();
    log::debug!("{} replies to {opening}", replies.len());

    Ok(ResponseReport {
        opening: opening_move.encode(),
        opening_hex: opening_hex.index(),
        neutral_hex: neutral_hex.index(),
        state: entry.key.clone(),
        replies,
        stances,
    })
}
