//! Analyses over policy tables and opening books
//!
//! Each analysis is a pure function from loaded documents to a serializable
//! report; printing is left to the CLI.

pub mod book;
pub mod chain_audit;
pub mod comparison;
pub mod depth;
pub mod diversity;
pub mod openings;
pub mod overview;
pub mod responses;
pub mod stats;
pub mod symmetry;
pub mod training;

pub use book::{BookReport, DominantFactor, book_analysis};
pub use chain_audit::{ChainAudit, audit_chains};
pub use comparison::{DEFAULT_COMPARISON_STATE, MoveChange, PolicyComparison, compare_policies};
pub use depth::{DepthReport, depth_analysis};
pub use diversity::{DiversityReport, opening_diversity};
pub use openings::{
    DistanceBand, DistanceBucket, OpeningMove, OpeningReport, TileEffect, TileVerdict,
    opening_analysis, opening_moves,
};
pub use overview::{ExplorationSummary, PolicyOverview, RankedMove, overview};
pub use responses::{Reply, ResponseReport, ResponseStance, response_analysis, successor_state};
pub use symmetry::{SymmetryReport, symmetric_pairs, symmetry_analysis};
pub use training::{TrainingMix, training_mix};
