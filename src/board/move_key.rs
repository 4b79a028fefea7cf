//! Move key grammar: `t<tile>h<hex>`
//!
//! Producers disagree on whether the `h` number is the 0-based board index or
//! a 1-based hex number, so conversions to and from board indices always take
//! an explicit [`HexIndexing`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, types::HexId};

/// How the `h` component of a move key maps onto board indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexIndexing {
    /// `h` is the board array index (0-18).
    ZeroBased,
    /// `h` is the board array index plus one (1-19).
    OneBased,
}

impl HexIndexing {
    fn offset(self) -> u32 {
        match self {
            HexIndexing::ZeroBased => 0,
            HexIndexing::OneBased => 1,
        }
    }
}

/// A decoded move key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MoveKey {
    pub tile: u32,
    /// The raw `h` number, interpreted through a [`HexIndexing`].
    pub hex: u32,
}

impl MoveKey {
    pub fn new(tile: u32, hex: u32) -> Self {
        MoveKey { tile, hex }
    }

    /// Decode a raw move key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedMoveKey`] unless the input is exactly `t`,
    /// one or more digits, `h`, one or more digits.
    pub fn decode(raw: &str) -> Result<Self> {
        let malformed = || Error::MalformedMoveKey {
            key: raw.to_string(),
        };

        let rest = raw.strip_prefix('t').ok_or_else(malformed)?;
        let (tile, hex) = rest.split_once('h').ok_or_else(malformed)?;

        let parse_digits = |digits: &str| -> Result<u32> {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            digits.parse().map_err(|_| malformed())
        };

        Ok(MoveKey {
            tile: parse_digits(tile)?,
            hex: parse_digits(hex)?,
        })
    }

    /// Build the move key that places `tile` on board index `index`.
    pub fn from_board_index(tile: u32, index: usize, indexing: HexIndexing) -> Self {
        MoveKey {
            tile,
            hex: index as u32 + indexing.offset(),
        }
    }

    /// Board hex this move targets under the given indexing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHex`] if the key does not name a board hex.
    pub fn board_hex(&self, indexing: HexIndexing) -> Result<HexId> {
        let index = self
            .hex
            .checked_sub(indexing.offset())
            .ok_or(Error::InvalidHex {
                hex: self.hex as usize,
            })?;
        HexId::new(index as usize)
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MoveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}h{}", self.tile, self.hex)
    }
}

impl FromStr for MoveKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MoveKey::decode(s)
    }
}
