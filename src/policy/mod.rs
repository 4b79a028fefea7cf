//! Read-only views of policy tables and opening books

pub mod database;
pub mod opening_book;
pub mod stats;

pub use database::{ActionTable, PolicyDatabase, PolicyDocument, StateEntry};
pub use opening_book::{Opening, OpeningBook, OpeningRecord};
pub use stats::{ActionStats, MoveSource, SOLVED_WEIGHT_THRESHOLD, classify_weight};
