//! Second-move report for one opening

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    analysis::{ResponseStance, opening_moves, response_analysis},
    board::HexBoardGeometry,
    cli::{
        commands::load_policy,
        config::AnalysisConfig,
        output::{abbreviate, format_number, print_kv, print_section, print_subsection},
    },
};

pub fn analyze(policy: &Path, opening: Option<&str>, config: &AnalysisConfig) -> Result<()> {
    let document = load_policy(policy)?;
    let geometry = HexBoardGeometry::standard();

    let opening = match opening {
        Some(key) => key.to_string(),
        None => {
            let (_, moves) = opening_moves(&document.database, &geometry)?;
            moves
                .first()
                .map(|m| m.key.clone())
                .context("opening position has no moves")?
        }
    };
    let report = response_analysis(&document.database, &geometry, &opening)?;

    print_section(&format!("MOVE 2 ANALYSIS - RESPONSE TO {}", report.opening));
    print_kv("Position", &abbreviate(&report.state, 80));
    print_kv("Opening tile at hex", &report.opening_hex.to_string());
    print_kv("Neutral tile at hex", &report.neutral_hex.to_string());
    print_kv("Available responses", &report.replies.len().to_string());

    print_subsection(&format!("Top {} responses", config.top_n.min(report.replies.len())));
    println!(
        "  {:<10} {:<5} {:<5} {:<7} {:<7} {:<9} {:<9}",
        "Move", "Tile", "Hex", "WR", "Games", "Dist P1", "Dist N"
    );
    for r in report.replies.iter().take(config.top_n) {
        println!(
            "  {:<10} {:<5} {:<5} {:<7.3} {:<7} {:<9.1} {:<9.1}",
            r.key, r.tile, r.hex, r.win_rate, r.games_played, r.distance_to_opening, r.distance_to_neutral
        );
    }

    print_subsection("Response patterns");
    for s in &report.stances {
        let label = match s.stance {
            ResponseStance::Attacking => "Attacking the opening tile",
            ResponseStance::Defending => "Next to the neutral tile",
            ResponseStance::Neutral => "Neutral positions",
        };
        println!(
            "  {label:<28}: Avg WR={:.3}, Total games={}, Count={}",
            s.average_win_rate,
            format_number(s.total_games),
            s.count
        );
    }
    Ok(())
}
