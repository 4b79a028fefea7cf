//! Hexuki board model: key encodings, geometry and chains

pub mod chains;
pub mod geometry;
pub mod move_key;
pub mod state_key;

pub use chains::{ChainSet, Diagonal, chains_containing, derive_diagonal_chains};
pub use geometry::{HexBoardGeometry, HexCoord, Reflection};
pub use move_key::{HexIndexing, MoveKey};
pub use state_key::{Cell, Owner, StateKey, count_occupied};
