//! Opening diversity report

use std::path::Path;

use anyhow::Result;

use crate::{
    analysis::opening_diversity,
    board::HexIndexing,
    cli::{
        commands::load_policy,
        config::AnalysisConfig,
        output::{format_number, format_percent, print_kv, print_section, print_subsection},
    },
};

pub fn analyze(policy: &Path, indexing: HexIndexing, config: &AnalysisConfig) -> Result<()> {
    let document = load_policy(policy)?;
    let report = opening_diversity(&document.database, indexing)?;

    print_section("P1 OPENING MOVE DIVERSITY");
    print_kv("Hex numbering", &format!("{indexing:?}"));
    print_kv("Turn-2 states", &format_number(report.turn_two_states as u64));
    print_kv("Opening-only states", &format_number(report.opening_only_states as u64));
    print_kv("Unique openings", &report.frequencies.len().to_string());

    print_subsection(&format!("Top {} most frequent openings", config.top_n));
    for (i, f) in report.frequencies.iter().take(config.top_n).enumerate() {
        println!(
            "  {:2}. {:8}: {:4} times ({})",
            i + 1,
            f.key,
            f.count,
            format_percent(f.share)
        );
    }

    print_subsection("Hex positions used");
    println!("  {:?}", report.distinct_hexes);
    println!("  Total: {} different hexes", report.distinct_hexes.len());
    Ok(())
}
