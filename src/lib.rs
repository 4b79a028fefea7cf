//! Hexuki policy toolkit
//!
//! This crate provides:
//! - Decoding of the state keys and move keys used in Hexuki training output
//! - Board geometry and the players' scoring chains
//! - Typed, order-preserving views of policy tables and opening books
//! - Analyses of training coverage, opening strength and board symmetry
//! - CSV export and a command-line front end

pub mod adapters;
pub mod analysis;
pub mod board;
pub mod cli;
pub mod codec;
pub mod error;
pub mod export;
pub mod policy;
pub mod ports;
pub mod types;

pub use board::{Cell, ChainSet, HexBoardGeometry, HexIndexing, MoveKey, Owner, StateKey};
pub use error::{Error, Result};
pub use policy::{ActionStats, MoveSource, OpeningBook, PolicyDatabase, PolicyDocument};
pub use types::{HEX_COUNT, HexId, TileValue};
