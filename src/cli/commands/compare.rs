//! Compare command - track one state's win rates across two policies

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::load_policy;
use crate::{
    analysis::{DEFAULT_COMPARISON_STATE, MoveChange, compare_policies},
    cli::{
        config::AnalysisConfig,
        output::{abbreviate, format_percent, print_section, print_subsection},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Compare one state's moves across two policies")]
pub struct CompareArgs {
    /// Earlier policy JSON file
    pub first: PathBuf,

    /// Later policy JSON file
    pub second: PathBuf,

    /// State key to compare (defaults to the neutral opening position)
    #[arg(long)]
    pub state: Option<String>,
}

fn print_change(c: &MoveChange) {
    println!(
        "  {:8}  {:>7}  {:>7}  {:>+7.1}%  {:4} -> {:4}",
        c.key,
        format_percent(c.before),
        format_percent(c.after),
        c.change * 100.0,
        c.games_before,
        c.games_after
    );
}

pub fn execute(args: CompareArgs, config: &AnalysisConfig) -> Result<()> {
    let first = load_policy(&args.first)?;
    let second = load_policy(&args.second)?;
    let state = args.state.as_deref().unwrap_or(DEFAULT_COMPARISON_STATE);

    let comparison = compare_policies(
        &first.database,
        &second.database,
        state,
        config.change_threshold,
    )?;

    print_section(&format!(
        "POLICY COMPARISON: {} vs {}",
        args.first.display(),
        args.second.display()
    ));
    println!("State: {}", abbreviate(state, 100));

    print_subsection(&format!("Biggest win rate changes (top {})", config.top_n));
    for c in comparison.changes.iter().take(config.top_n) {
        print_change(c);
    }

    print_subsection(&format!(
        "Moves that got worse (< -{}): {}",
        config.change_threshold,
        comparison.regressions.len()
    ));
    for c in comparison.regressions.iter().take(config.top_n) {
        print_change(c);
    }

    print_subsection(&format!(
        "Moves that got better (> {}): {}",
        config.change_threshold,
        comparison.improvements.len()
    ));
    for c in comparison.improvements.iter().take(config.top_n) {
        print_change(c);
    }

    if !comparison.only_in_first.is_empty() || !comparison.only_in_second.is_empty() {
        log::warn!(
            "{} moves only in the first policy, {} only in the second",
            comparison.only_in_first.len(),
            comparison.only_in_second.len()
        );
        println!("\nOnly in first:  {}", comparison.only_in_first.join(", "));
        println!("Only in second: {}", comparison.only_in_second.join(", "));
    }
    Ok(())
}
