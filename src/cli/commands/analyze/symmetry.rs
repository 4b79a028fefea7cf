//! Opening symmetry report

use std::path::Path;

use anyhow::Result;

use crate::{
    analysis::symmetry_analysis,
    board::HexBoardGeometry,
    cli::{
        commands::load_policy,
        output::{print_section, print_subsection},
    },
};

fn format_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "n/a".to_string(), |r| format!("{r:.3}"))
}

pub fn analyze(policy: &Path) -> Result<()> {
    let document = load_policy(policy)?;
    let geometry = HexBoardGeometry::standard();
    let report = symmetry_analysis(&document.database, &geometry)?;

    print_section("BOARD SYMMETRY CHECK");
    print_subsection("Symmetric pairs through the centre");
    for pair in &report.pairs {
        let (a, b) = (geometry.coords(pair.first), geometry.coords(pair.second));
        println!(
            "\n  Hex {} (row {}, col {}) vs Hex {} (row {}, col {}):",
            pair.first, a.row, a.col, pair.second, b.row, b.col
        );
        println!(
            "    Hex {}: Avg WR = {}, Total games = {}",
            pair.first,
            format_rate(pair.first_win_rate),
            pair.first_games
        );
        println!(
            "    Hex {}: Avg WR = {}, Total games = {}",
            pair.second,
            format_rate(pair.second_win_rate),
            pair.second_games
        );
        println!(
            "    Difference: {:+.3} ({:+.1} percentage points)",
            pair.score,
            pair.score * 100.0
        );
    }

    super::chains::print_audit(&report.chain_audit);
    Ok(())
}
