//! Opening book documents
//!
//! An opening book records outcome counts for first moves only, produced by
//! playing a fixed number of games from each opening.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Result, board::MoveKey};

/// Outcome record for one opening move.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_id: Option<u32>,
    pub games: u64,
    #[serde(default)]
    pub wins: f64,
    #[serde(default)]
    pub losses: f64,
    #[serde(default)]
    pub ties: f64,
}

impl OpeningRecord {
    /// wins / games, or 0 when no games were played.
    pub fn win_rate(&self) -> f64 {
        if self.games > 0 {
            self.wins / self.games as f64
        } else {
            0.0
        }
    }
}

/// A complete opening book file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningBook {
    #[serde(default)]
    pub total_games: u64,
    #[serde(default)]
    pub games_per_opening: u64,
    /// Number of empty hexes at which play switched to the endgame solver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimax_threshold: Option<u32>,
    /// In file order.
    pub openings: IndexMap<String, OpeningRecord>,
}

/// A resolved opening: decoded move plus its record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opening<'a> {
    pub key: &'a str,
    pub tile: u32,
    pub hex: u32,
    pub record: &'a OpeningRecord,
}

impl Opening<'_> {
    pub fn win_rate(&self) -> f64 {
        self.record.win_rate()
    }
}

impl OpeningBook {
    /// Resolve every opening's tile and hex, preferring the explicit record
    /// fields and falling back to the move key.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedMoveKey`] when a record lacks tile or
    /// hex and its key does not decode.
    pub fn openings(&self) -> Result<Vec<Opening<'_>>> {
        self.openings
            .iter()
            .map(|(key, record)| {
                let (tile, hex) = match (record.tile, record.hex_id) {
                    (Some(tile), Some(hex)) => (tile, hex),
                    (tile, hex) => match MoveKey::decode(key) {
                        Ok(decoded) => (tile.unwrap_or(decoded.tile), hex.unwrap_or(decoded.hex)),
                        Err(e) => return Err(e),
                    },
                };
                Ok(Opening {
                    key,
                    tile,
                    hex,
                    record,
                })
            })
            .collect()
    }
}
