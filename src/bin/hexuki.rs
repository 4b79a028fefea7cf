//! Hexuki CLI - inspect trained policy tables and opening books
//!
//! This CLI provides a unified interface for:
//! - Analyzing policy tables (overview, depth, training mix, openings, ...)
//! - Ranking opening books
//! - Comparing two policies on one state
//! - Decoding individual state and move keys
//! - Exporting opening tables as CSV

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexuki::cli::{commands, config::AnalysisConfig, logging};

#[derive(Parser)]
#[command(name = "hexuki")]
#[command(version, about = "Analysis toolkit for Hexuki policy tables", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file overriding analysis thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a trained policy table
    Analyze(commands::analyze::AnalyzeArgs),

    /// Analyze an opening book
    Book(commands::book::BookArgs),

    /// Compare one state's moves across two policies
    Compare(commands::compare::CompareArgs),

    /// Decode a state key or move key
    Decode(commands::decode::DecodeArgs),

    /// Export analysis tables
    Export(commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("failed to initialize logger")?;

    let config = AnalysisConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &config),
        Commands::Book(args) => commands::book::execute(args, &config),
        Commands::Compare(args) => commands::compare::execute(args, &config),
        Commands::Decode(args) => commands::decode::execute(args),
        Commands::Export(args) => commands::export::execute(args),
    }
}
