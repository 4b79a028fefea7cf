//! Book command - rank the openings of an opening book

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::load_opening_book;
use crate::{
    analysis::{DominantFactor, book_analysis, book::BookOpening},
    cli::{
        config::AnalysisConfig,
        output::{format_number, format_percent, print_kv, print_section, print_subsection},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Analyze an opening book")]
pub struct BookArgs {
    /// Path to the opening book JSON file
    pub book: PathBuf,
}

fn print_openings(openings: &[BookOpening], offset: usize) {
    for (i, o) in openings.iter().enumerate() {
        println!(
            "  {:2}. {:6} (hex {:2}): {:>6} ({}W-{}L-{}T)",
            offset + i + 1,
            o.key,
            o.hex,
            format_percent(o.win_rate),
            o.wins,
            o.losses,
            o.ties
        );
    }
}

pub fn execute(args: BookArgs, config: &AnalysisConfig) -> Result<()> {
    let book = load_opening_book(&args.book)?;
    let report = book_analysis(&book)?;

    print_section("OPENING BOOK ANALYSIS");
    print_kv("Total games", &format_number(report.total_games));
    print_kv("Games per opening", &report.games_per_opening.to_string());
    print_kv("Openings tested", &report.ranked.len().to_string());
    if let Some(threshold) = report.minimax_threshold {
        print_kv("Minimax threshold", &format!("{threshold} empty positions"));
    }

    let n = config.top_n.min(report.ranked.len());
    print_subsection(&format!("Top {n} openings"));
    print_openings(&report.ranked[..n], 0);
    print_subsection(&format!("Worst {n} openings"));
    let start = report.ranked.len() - n;
    print_openings(&report.ranked[start..], start);

    print_subsection("Statistics");
    print_kv("Average win rate", &format_percent(report.average_win_rate));
    print_kv("Best win rate", &format_percent(report.best_win_rate));
    print_kv("Worst win rate", &format_percent(report.worst_win_rate));
    print_kv("Spread", &format!("{:.1} percentage points", report.spread() * 100.0));

    print_subsection("Win rate by hex (average across tiles)");
    for (i, g) in report.by_hex.iter().take(config.top_n).enumerate() {
        println!(
            "  {:2}. Hex {:2}: Avg WR={} ({} tiles tested)",
            i + 1,
            g.value,
            format_percent(g.average_win_rate),
            g.count
        );
    }

    print_subsection("Win rate by tile value");
    for (i, g) in report.by_tile.iter().enumerate() {
        println!(
            "  {}. Tile {}: Avg WR={} ({} positions tested)",
            i + 1,
            g.value,
            format_percent(g.average_win_rate),
            g.count
        );
    }

    print_section("RECOMMENDATIONS");
    if let Some(threshold) = report.top_tier_threshold {
        println!("Top tier openings (>= {}):", format_percent(threshold));
        for key in &report.top_tier {
            println!("  {key}");
        }
    }
    print_kv("Position (hex) spread", &format!("{:.1} pp", report.hex_spread * 100.0));
    print_kv("Tile value spread", &format!("{:.1} pp", report.tile_spread * 100.0));
    match report.dominant {
        DominantFactor::Position => println!("  -> Position matters more than tile value"),
        DominantFactor::TileValue => println!("  -> Tile value matters more than position"),
    }
    Ok(())
}
