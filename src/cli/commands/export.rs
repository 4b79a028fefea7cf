//! Export command - write analysis tables for external tools

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::load_policy;
use crate::{
    analysis::opening_moves,
    board::HexBoardGeometry,
    export::export_openings,
};

#[derive(Parser, Debug)]
#[command(about = "Export analysis tables")]
pub struct ExportArgs {
    #[command(subcommand)]
    pub command: ExportCommand,
}

#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    /// Opening moves with position, win rate and chain membership as CSV
    Openings {
        /// Path to the policy JSON file
        policy: PathBuf,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },
}

pub fn execute(args: ExportArgs) -> Result<()> {
    match args.command {
        ExportCommand::Openings { policy, output } => {
            let document = load_policy(&policy)?;
            let (_, moves) = opening_moves(&document.database, &HexBoardGeometry::standard())?;
            let rows = export_openings(&moves, &output)
                .with_context(|| format!("failed to export to {}", output.display()))?;
            println!("Exported {rows} opening moves to {}", output.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_required() {
        assert!(ExportArgs::try_parse_from(["export", "openings", "policy.json"]).is_err());
        let args =
            ExportArgs::parse_from(["export", "openings", "policy.json", "--output", "out.csv"]);
        let ExportCommand::Openings { output, .. } = args.command;
        assert_eq!(output, PathBuf::from("out.csv"));
    }
}
