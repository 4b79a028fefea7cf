//! State key grammar
//!
//! A state key is the position fingerprint the training engine uses as the
//! outer key of a policy table:
//!
//! ```text
//! <turn>|<cell>,<cell>,...(19 cells)|p1a:<digits>|p2a:<digits>|p1u:<list>|p2u:<list>
//! cell := "null" | <tile value>p<owner>      owner := 0 (neutral) | 1 | 2
//! ```
//!
//! Only the turn and board segments are required; missing tile-set segments
//! decode as empty payloads.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    types::{HEX_COUNT, HexId},
};

/// Labels of the four tile-set segments, in key order.
const TILE_SET_LABELS: [&str; 4] = ["p1a", "p2a", "p1u", "p2u"];

/// Owner of a placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// The starting tile placed before the first move.
    Neutral,
    Player1,
    Player2,
}

impl Owner {
    fn from_digit(digit: &str) -> Option<Self> {
        match digit {
            "0" => Some(Owner::Neutral),
            "1" => Some(Owner::Player1),
            "2" => Some(Owner::Player2),
            _ => None,
        }
    }

    fn to_digit(self) -> char {
        match self {
            Owner::Neutral => '0',
            Owner::Player1 => '1',
            Owner::Player2 => '2',
        }
    }
}

/// A single board slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Tile { value: u8, owner: Owner },
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn owner(&self) -> Option<Owner> {
        match self {
            Cell::Empty => None,
            Cell::Tile { owner, .. } => Some(*owner),
        }
    }

    pub fn value(&self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Tile { value, .. } => Some(*value),
        }
    }

    fn parse(token: &str, key: &str, index: usize) -> Result<Self> {
        if token == "null" {
            return Ok(Cell::Empty);
        }

        let invalid = || {
            Error::malformed_state(key, format!("invalid cell '{token}' at index {index}"))
        };

        let (value, owner) = token.split_once('p').ok_or_else(invalid)?;
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u8 = value.parse().map_err(|_| invalid())?;
        if !(1..=9).contains(&value) {
            return Err(invalid());
        }
        let owner = Owner::from_digit(owner).ok_or_else(invalid)?;

        Ok(Cell::Tile { value, owner })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "null"),
            Cell::Tile { value, owner } => write!(f, "{}p{}", value, owner.to_digit()),
        }
    }
}

/// Count occupied cells on a board; equals the number of tiles placed so far.
pub fn count_occupied(board: &[Cell]) -> usize {
    board.iter().filter(|cell| !cell.is_empty()).count()
}

/// A decoded state key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey {
    /// Side to move.
    pub turn: u32,
    pub board: [Cell; HEX_COUNT],
    /// Raw payload of the `p1a:` segment (available tiles, one digit each).
    pub p1_available: String,
    /// Raw payload of the `p2a:` segment.
    pub p2_available: String,
    /// Raw payload of the `p1u:` segment (used positions, comma separated).
    ///
    /// Some trainer builds joined positions with no separator, so `p1u:37`
    /// may mean hexes 3 and 7. Such payloads only surface as an error from
    /// [`StateKey::used_positions`] when the run-together number is off the
    /// board; `p1u:12` still reads as hex 12.
    pub p1_used: String,
    /// Raw payload of the `p2u:` segment, laid out like `p1_used`.
    pub p2_used: String,
}

impl StateKey {
    /// Decode a raw state key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedStateKey`] when the key has fewer than two
    /// segments, the turn is not an integer, the board does not have exactly
    /// 19 valid cells, a tile-set segment carries the wrong label, or more
    /// than one cell holds the neutral tile.
    pub fn decode(raw: &str) -> Result<Self> {
        let segments: Vec<&str> = raw.split('|').collect();
        if segments.len() < 2 {
            return Err(Error::malformed_state(
                raw,
                format!("expected at least 2 segments, got {}", segments.len()),
            ));
        }
        if segments.len() > 2 + TILE_SET_LABELS.len() {
            return Err(Error::malformed_state(
                raw,
                format!("expected at most 6 segments, got {}", segments.len()),
            ));
        }

        let turn: u32 = segments[0]
            .parse()
            .map_err(|_| Error::malformed_state(raw, format!("invalid turn '{}'", segments[0])))?;

        let tokens: Vec<&str> = segments[1].split(',').collect();
        if tokens.len() != HEX_COUNT {
            return Err(Error::malformed_state(
                raw,
                format!("expected {HEX_COUNT} board cells, got {}", tokens.len()),
            ));
        }

        let mut board = [Cell::Empty; HEX_COUNT];
        for (index, token) in tokens.iter().enumerate() {
            board[index] = Cell::parse(token, raw, index)?;
        }

        let neutral = board
            .iter()
            .filter(|cell| cell.owner() == Some(Owner::Neutral))
            .count();
        if neutral > 1 {
            return Err(Error::malformed_state(
                raw,
                format!("{neutral} neutral tiles on board (at most 1 allowed)"),
            ));
        }

        let mut payloads: [String; 4] = Default::default();
        for (slot, (segment, label)) in segments[2..].iter().zip(TILE_SET_LABELS).enumerate() {
            let payload = segment
                .strip_prefix(label)
                .and_then(|rest| rest.strip_prefix(':'))
                .ok_or_else(|| {
                    Error::malformed_state(
                        raw,
                        format!("segment '{segment}' should start with '{label}:'"),
                    )
                })?;
            payloads[slot] = payload.to_string();
        }
        let [p1_available, p2_available, p1_used, p2_used] = payloads;

        Ok(StateKey {
            turn,
            board,
            p1_available,
            p2_available,
            p1_used,
            p2_used,
        })
    }

    /// Encode back into the canonical string form.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Number of tiles on the board, i.e. the move depth of the position.
    pub fn count_occupied(&self) -> usize {
        count_occupied(&self.board)
    }

    pub fn empty_count(&self) -> usize {
        HEX_COUNT - self.count_occupied()
    }

    pub fn cell(&self, hex: HexId) -> Cell {
        self.board[hex.index()]
    }

    /// Occupied cells owned by `owner`, as (board index, tile value).
    pub fn tiles_of(&self, owner: Owner) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| match cell {
                Cell::Tile { value, owner: o } if *o == owner => Some((index, *value)),
                _ => None,
            })
    }

    /// Board index of the neutral starting tile, if present.
    pub fn neutral_hex(&self) -> Option<usize> {
        self.tiles_of(Owner::Neutral).map(|(index, _)| index).next()
    }

    /// Tiles still available to `player` (1 or 2), parsed from the digit payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedStateKey`] if the payload contains a non-digit.
    pub fn available_tiles(&self, player: Owner) -> Result<Vec<u8>> {
        let payload = match player {
            Owner::Player2 => &self.p2_available,
            _ => &self.p1_available,
        };
        payload
            .chars()
            .map(|c| {
                c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                    Error::malformed_state(&self.encode(), format!("invalid tile digit '{c}'"))
                })
            })
            .collect()
    }

    /// Positions already used by `player` (1 or 2), parsed from the list payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedStateKey`] if an entry is not an integer or
    /// names a position outside 0-18.
    pub fn used_positions(&self, player: Owner) -> Result<Vec<u32>> {
        let payload = match player {
            Owner::Player2 => &self.p2_used,
            _ => &self.p1_used,
        };
        if payload.is_empty() {
            return Ok(Vec::new());
        }
        payload
            .split(',')
            .map(|entry| match entry.parse::<u32>() {
                Ok(position) if (position as usize) < HEX_COUNT => Ok(position),
                Ok(_) => Err(Error::malformed_state(
                    &self.encode(),
                    format!("used position '{entry}' is off the board"),
                )),
                Err(_) => Err(Error::malformed_state(
                    &self.encode(),
                    format!("invalid used position '{entry}'"),
                )),
            })
            .collect()
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|", self.turn)?;
        for (index, cell) in self.board.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{cell}")?;
        }
        write!(
            f,
            "|p1a:{}|p2a:{}|p1u:{}|p2u:{}",
            self.p1_available, self.p2_available, self.p1_used, self.p2_used
        )
    }
}

impl FromStr for StateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StateKey::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPENING: &str = "1|null,null,null,null,null,null,null,null,null,1p0,null,null,null,null,null,null,null,null,null|p1a:123456789|p2a:123456789|p1u:|p2u:";

    #[test]
    fn test_decode_opening_state() {
        let key = StateKey::decode(OPENING).unwrap();
        assert_eq!(key.turn, 1);
        assert_eq!(key.count_occupied(), 1);
        assert_eq!(key.empty_count(), 18);
        assert_eq!(key.neutral_hex(), Some(9));
        assert_eq!(key.p1_available, "123456789");
        assert!(key.p1_used.is_empty());
    }

    #[test]
    fn test_encode_round_trip() {
        let raw = "2|null,null,null,null,null,null,null,3p1,null,1p2,null,null,null,null,null,null,null,null,null|p1a:12456789|p2a:123456789|p1u:7|p2u:";
        let key = StateKey::decode(raw).unwrap();
        assert_eq!(key.encode(), raw);
        assert_eq!(key.tiles_of(Owner::Player1).collect::<Vec<_>>(), vec![(7, 3)]);
    }

    #[test]
    fn test_missing_tile_sets_default_to_empty() {
        let raw = "1|null,null,null,null,null,null,null,null,null,1p0,null,null,null,null,null,null,null,null,null";
        let key = StateKey::decode(raw).unwrap();
        assert!(key.p1_available.is_empty());
        assert!(key.p2_used.is_empty());
    }

    #[test]
    fn test_single_segment_is_malformed() {
        assert!(matches!(
            StateKey::decode("1"),
            Err(Error::MalformedStateKey { .. })
        ));
    }

    #[test]
    fn test_short_board_is_malformed() {
        let err = StateKey::decode("1|null,null,1p0").unwrap_err();
        assert!(err.to_string().contains("expected 19 board cells"));
    }

    #[test]
    fn test_invalid_cells_rejected() {
        for bad in ["0p1", "3p3", "p1", "3x1", "10p1"] {
            let raw = OPENING.replacen("1p0", bad, 1);
            assert!(StateKey::decode(&raw).is_err(), "cell '{bad}' should be rejected");
        }
    }

    #[test]
    fn test_two_neutral_tiles_rejected() {
        let raw = OPENING.replacen("null", "2p0", 1);
        assert!(StateKey::decode(&raw).is_err());
    }

    #[test]
    fn test_wrong_segment_label_rejected() {
        let raw = OPENING.replace("p2a:", "p2x:");
        assert!(StateKey::decode(&raw).is_err());
    }

    #[test]
    fn test_tile_set_accessors() {
        let raw = OPENING
            .replace("p1a:123456789", "p1a:2459")
            .replace("p1u:", "p1u:3,11");
        let key = StateKey::decode(&raw).unwrap();
        assert_eq!(key.available_tiles(Owner::Player1).unwrap(), vec![2, 4, 5, 9]);
        assert_eq!(key.used_positions(Owner::Player1).unwrap(), vec![3, 11]);
        assert!(key.used_positions(Owner::Player2).unwrap().is_empty());
    }

    #[test]
    fn test_unseparated_used_positions_rejected() {
        let raw = OPENING.replace("p1u:", "p1u:37");
        let key = StateKey::decode(&raw).unwrap();
        assert!(matches!(
            key.used_positions(Owner::Player1),
            Err(Error::MalformedStateKey { .. })
        ));

        let raw = OPENING.replace("p2u:", "p2u:18,19");
        let key = StateKey::decode(&raw).unwrap();
        assert!(key.used_positions(Owner::Player2).is_err());
    }

    #[test]
    fn test_count_occupied_free_function() {
        let mut board = [Cell::Empty; HEX_COUNT];
        assert_eq!(count_occupied(&board), 0);
        board[4] = Cell::Tile {
            value: 5,
            owner: Owner::Player2,
        };
        assert_eq!(count_occupied(&board), 1);
    }
}
