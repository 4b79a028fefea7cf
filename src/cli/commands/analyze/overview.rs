//! Policy overview report

use std::path::Path;

use anyhow::Result;

use crate::{
    analysis::{RankedMove, overview},
    cli::{
        commands::load_policy,
        config::AnalysisConfig,
        output::{abbreviate, format_number, format_percent, print_kv, print_section, print_subsection},
    },
};

fn print_ranked(moves: &[RankedMove]) {
    for (i, m) in moves.iter().enumerate() {
        println!(
            "  {:2}. {:8}: WR={:.3}, Games={:6}, W={:.1}, L={:.1}",
            i + 1,
            m.key,
            m.win_rate,
            m.games_played,
            m.wins,
            m.losses
        );
    }
}

pub fn analyze(policy: &Path, config: &AnalysisConfig) -> Result<()> {
    let document = load_policy(policy)?;
    let report = overview(&document, config.high_win_rate, config.low_win_rate, 5)?;

    print_section("POLICY ANALYSIS");
    print_kv("Total states", &format_number(report.states as u64));
    print_kv("Total games", &format_number(report.total_games));

    print_subsection(&format!("Opening position ({})", abbreviate(&report.opening_state, 50)));
    print_kv("Available moves", &report.opening_moves_available.to_string());

    let n = config.top_n.min(report.ranked_openings.len());
    println!("\n  Top {n} opening moves by win rate:");
    print_ranked(&report.ranked_openings[..n]);
    println!("\n  Bottom {n} opening moves by win rate:");
    print_ranked(&report.ranked_openings[report.ranked_openings.len() - n..]);

    if let Some(exploration) = &report.exploration {
        print_subsection("Exploration");
        print_kv("State-action pairs", &format_number(exploration.pairs as u64));
        print_kv("Avg games per action", &format!("{:.1}", exploration.average_games));
        print_kv("Median games per action", &format!("{}", exploration.median_games));
        print_kv("Max games per action", &exploration.max_games.to_string());
        print_kv("Min games per action", &exploration.min_games.to_string());
    }

    print_subsection("States with most actions explored");
    for state in &report.most_actions {
        println!("  {} : {} actions", abbreviate(&state.key, 80), state.actions);
    }
    print_subsection("States with fewest actions explored");
    for state in &report.fewest_actions {
        println!("  {} : {} actions", abbreviate(&state.key, 80), state.actions);
    }

    let rates = &report.win_rates;
    print_subsection("Win rate distribution");
    print_kv("Mean win rate", &format!("{:.3}", rates.mean));
    print_kv("Median win rate", &format!("{:.3}", rates.median));
    print_kv(
        &format!("Actions with WR > {}", config.high_win_rate),
        &format!("{} ({})", format_number(rates.high_count as u64), format_percent(rates.high_share)),
    );
    print_kv(
        &format!("Actions with WR < {}", config.low_win_rate),
        &format!("{} ({})", format_number(rates.low_count as u64), format_percent(rates.low_share)),
    );
    Ok(())
}
