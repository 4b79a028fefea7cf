//! Newtype wrappers for board positions and tile values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of hexes on the Hexuki board.
pub const HEX_COUNT: usize = 19;

/// A hex on the board, addressed by its 0-based array index (0-18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexId(usize);

impl HexId {
    /// The starting hex in the middle of the board.
    pub const CENTER: HexId = HexId(9);

    /// Create a new hex id, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidHex`] if the index is >= 19.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value < HEX_COUNT {
            Ok(HexId(value))
        } else {
            Err(crate::Error::InvalidHex { hex: value })
        }
    }

    /// Iterate over every hex in board order.
    pub fn all() -> impl Iterator<Item = HexId> {
        (0..HEX_COUNT).map(HexId)
    }

    /// Get the inner value.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<HexId> for usize {
    fn from(hex: HexId) -> Self {
        hex.0
    }
}

impl fmt::Display for HexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tile face value (1-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileValue(u8);

impl TileValue {
    /// Create a new tile value, validating the 1-9 range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTile`] for values outside 1-9.
    pub fn new(value: u32) -> Result<Self, crate::Error> {
        if (1..=9).contains(&value) {
            Ok(TileValue(value as u8))
        } else {
            Err(crate::Error::InvalidTile { value })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<TileValue> for u32 {
    fn from(tile: TileValue) -> Self {
        u32::from(tile.0)
    }
}

impl fmt::Display for TileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
