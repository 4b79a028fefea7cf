//! Move-depth exploration report

use std::path::Path;

use anyhow::Result;

use crate::{
    analysis::depth_analysis,
    cli::{
        commands::load_policy,
        config::AnalysisConfig,
        output::{abbreviate, format_number, print_kv, print_section, print_subsection},
    },
};

pub fn analyze(policy: &Path, config: &AnalysisConfig) -> Result<()> {
    let document = load_policy(policy)?;
    let report = depth_analysis(&document.database, config.depth_limit, config.states_per_depth)?;

    print_section(&format!("OPENING ANALYSIS - FIRST {} MOVES", config.depth_limit));
    print_kv("Total states", &format_number(document.database.len() as u64));
    print_kv("Total games", &format_number(document.total_games_played));

    print_subsection("States by move depth");
    for (depth, count) in report.states_by_depth.iter().take(10) {
        println!("  Move {depth}: {} states", format_number(*count as u64));
    }

    for level in &report.levels {
        if level.state_count == 0 {
            println!("\nMove {}: No data", level.depth);
            continue;
        }
        print_section(&format!("MOVE {} ({} pieces on board)", level.depth, level.depth));
        print_kv("States at this depth", &format_number(level.state_count as u64));

        for (rank, state) in level.top_states.iter().enumerate() {
            println!(
                "\n  State #{} (total games: {}):",
                rank + 1,
                format_number(state.total_games)
            );
            println!("    {}", abbreviate(&state.key, 100));
            println!("    Available actions: {}", state.actions.len());

            println!("\n    Most explored moves:");
            for (i, m) in state.actions.iter().take(config.top_n).enumerate() {
                println!(
                    "      {:2}. {:10}: Games={:6}, WR={:.3}, W={:8.1}, L={:8.1}",
                    i + 1,
                    m.key,
                    m.games_played,
                    m.win_rate,
                    m.wins,
                    m.losses
                );
            }

            println!("\n    Exploration distribution:");
            println!("      Max games on one move: {}", format_number(state.max_games));
            println!("      Min games on one move: {}", format_number(state.min_games));
            println!("      Avg games per move: {:.1}", state.average_games);
            match state.exploration_ratio {
                Some(ratio) => println!("      Exploration ratio (max/min): {ratio:.1}x"),
                None => println!("      Exploration ratio (max/min): inf"),
            }
            println!(
                "      Exploration diversity: {:.3} (1.0 = perfectly uniform)",
                state.diversity
            );
        }
    }

    if let Some(summary) = &report.summary {
        print_section("SUMMARY");
        print_kv("State-action pairs", &format_number(summary.pairs as u64));
        print_kv("Avg games per action", &format!("{:.1}", summary.average_games));
        print_kv("Median games per action", &summary.median_games.to_string());
        print_kv("Max games per action", &format_number(summary.max_games));
        print_kv("Min games per action", &summary.min_games.to_string());
    }
    Ok(())
}
