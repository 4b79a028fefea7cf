//! Analyze command - inspect a trained policy table
//!
//! Each subcommand prints one report built by [`crate::analysis`].

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::{board::HexIndexing, cli::config::AnalysisConfig};

mod chains;
mod depth;
mod diversity;
mod openings;
mod overview;
mod responses;
mod symmetry;
mod training;

#[derive(Parser, Debug)]
#[command(about = "Analyze a trained policy table")]
pub struct AnalyzeArgs {
    #[command(subcommand)]
    pub command: AnalyzeCommand,
}

/// How `h` numbers in reconstructed move keys count board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HexIndexingArg {
    /// `h` is the board index (0-18)
    Zero,
    /// `h` is the board index plus one (1-19)
    One,
}

impl From<HexIndexingArg> for HexIndexing {
    fn from(arg: HexIndexingArg) -> Self {
        match arg {
            HexIndexingArg::Zero => HexIndexing::ZeroBased,
            HexIndexingArg::One => HexIndexing::OneBased,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum AnalyzeCommand {
    /// State and game counts, opening ranking, exploration and win rates
    Overview {
        /// Path to the policy JSON file
        policy: PathBuf,
    },

    /// Exploration of the most played states at the first move depths
    Depth {
        /// Path to the policy JSON file
        policy: PathBuf,
    },

    /// Random versus solver-chosen moves and endgame coverage
    Training {
        /// Path to the policy JSON file
        policy: PathBuf,
    },

    /// Opening moves by position, tile value and chain
    Openings {
        /// Path to the policy JSON file
        policy: PathBuf,
    },

    /// Player 2's replies to one opening move
    Responses {
        /// Path to the policy JSON file
        policy: PathBuf,

        /// Opening move to follow (defaults to the best-rated opening)
        #[arg(long)]
        opening: Option<String>,
    },

    /// Win rates of opening hexes mirrored through the centre
    Symmetry {
        /// Path to the policy JSON file
        policy: PathBuf,
    },

    /// Audit the chain definitions against the board geometry
    Chains {
        /// Audit the earlier player-2 chain set instead of the current one
        #[arg(long)]
        legacy: bool,
    },

    /// Player 1 opening moves reconstructed from turn-2 states
    Diversity {
        /// Path to the policy JSON file
        policy: PathBuf,

        /// Hex numbering used for the reconstructed move keys
        #[arg(long, value_enum)]
        hex_indexing: HexIndexingArg,
    },
}

pub fn execute(args: AnalyzeArgs, config: &AnalysisConfig) -> Result<()> {
    match args.command {
        AnalyzeCommand::Overview { policy } => overview::analyze(&policy, config),
        AnalyzeCommand::Depth { policy } => depth::analyze(&policy, config),
        AnalyzeCommand::Training { policy } => training::analyze(&policy, config),
        AnalyzeCommand::Openings { policy } => openings::analyze(&policy, config),
        AnalyzeCommand::Responses { policy, opening } => {
            responses::analyze(&policy, opening.as_deref(), config)
        }
        AnalyzeCommand::Symmetry { policy } => symmetry::analyze(&policy),
        AnalyzeCommand::Chains { legacy } => chains::analyze(legacy),
        AnalyzeCommand::Diversity {
            policy,
            hex_indexing,
        } => diversity::analyze(&policy, hex_indexing.into(), config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diversity_requires_indexing() {
        assert!(AnalyzeArgs::try_parse_from(["analyze", "diversity", "policy.json"]).is_err());

        let args = AnalyzeArgs::parse_from([
            "analyze",
            "diversity",
            "policy.json",
            "--hex-indexing",
            "one",
        ]);
        match args.command {
            AnalyzeCommand::Diversity { hex_indexing, .. } => {
                assert_eq!(HexIndexing::from(hex_indexing), HexIndexing::OneBased);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_responses_opening_is_optional() {
        let args = AnalyzeArgs::parse_from(["analyze", "responses", "policy.json"]);
        match args.command {
            AnalyzeCommand::Responses { opening, .. } => assert!(opening.is_none()),
            other => panic!("unexpected command {other:?}"),
        }

        let args =
            AnalyzeArgs::parse_from(["analyze", "responses", "policy.json", "--opening", "t1h7"]);
        match args.command {
            AnalyzeCommand::Responses { opening, .. } => {
                assert_eq!(opening.as_deref(), Some("t1h7"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_policy_path_required() {
        assert!(AnalyzeArgs::try_parse_from(["analyze", "overview"]).is_err());
        assert!(AnalyzeArgs::try_parse_from(["analyze", "chains"]).is_ok());
    }
}
