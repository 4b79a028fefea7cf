//! Training-mix report

use std::path::Path;

use anyhow::Result;

use crate::{
    analysis::training_mix,
    cli::{
        commands::load_policy,
        config::AnalysisConfig,
        output::{format_number, format_percent, print_kv, print_section, print_subsection},
    },
};

pub fn analyze(policy: &Path, config: &AnalysisConfig) -> Result<()> {
    let document = load_policy(policy)?;
    let mix = training_mix(
        &document,
        config.endgame_empty_threshold,
        config.solved_weight_threshold,
    )?;

    print_section("TRAINING STRATEGY ANALYSIS");
    print_kv("Training method", mix.training_method.as_deref().unwrap_or("unknown"));
    print_kv("Created", mix.created.as_deref().unwrap_or("unknown"));
    print_kv("Total games", &format_number(document.total_games_played));
    print_kv("Total states", &format_number(document.database.len() as u64));

    print_subsection(&format!(
        "Move weights (solved at average weight >= {})",
        config.solved_weight_threshold
    ));
    print_kv("Total move instances", &format_number(mix.total_moves()));
    print_kv(
        "Random moves",
        &format!("{} ({})", format_number(mix.random_moves), format_percent(mix.random_share())),
    );
    print_kv(
        "Solved moves",
        &format!("{} ({})", format_number(mix.solved_moves), format_percent(mix.solved_share())),
    );

    print_subsection(&format!(
        "Endgame states (<= {} empty cells)",
        config.endgame_empty_threshold
    ));
    print_kv("Endgame states", &format_number(mix.endgame_states as u64));
    for (empty, count) in &mix.endgame_histogram {
        println!("    {empty:2} empty: {}", format_number(*count as u64));
    }
    for (i, sample) in mix.endgame_samples.iter().enumerate() {
        println!(
            "\n  Endgame state {}: {} empty, {} moves explored",
            i + 1,
            sample.empty_cells,
            sample.action_count
        );
        for m in &sample.moves {
            println!(
                "    {}: {} games, weight={:.1}, WR={}",
                m.key,
                m.games_played,
                m.average_weight,
                format_percent(m.win_rate)
            );
        }
    }

    if let Some(per_state) = &mix.moves_per_state {
        print_subsection("Moves per state");
        print_kv("Average", &format!("{:.1}", per_state.average));
        print_kv("Max", &per_state.max.to_string());
        print_kv("Min", &per_state.min.to_string());
    }

    print_subsection("Opening coverage");
    for (key, games) in mix.opening_coverage.iter().take(config.top_n) {
        println!("    {key:8}: {} games", format_number(*games));
    }
    println!("\n  Opening moves tried: {}", mix.opening_coverage.len());
    print_kv("Avg states per game", &format!("{:.1}", mix.states_per_game));
    Ok(())
}
