//! Opening move report: spatial, tile-value and chain breakdowns

use std::path::Path;

use anyhow::Result;

use crate::{
    analysis::{DistanceBand, OpeningMove, TileEffect, TileVerdict, opening_analysis, openings::GroupSummary},
    board::HexBoardGeometry,
    cli::{
        commands::load_policy,
        config::AnalysisConfig,
        output::{format_chains, format_number, print_kv, print_section, print_subsection},
    },
};

fn print_moves(moves: &[OpeningMove], offset: usize) {
    println!(
        "  {:<5} {:<8} {:<5} {:<5} {:<4} {:<4} {:<6} {:<7} {:<7} {:<10} P2 chains",
        "Rank", "Move", "Tile", "Hex", "Row", "Col", "Dist", "WR", "Games", "P1 chains"
    );
    for (i, m) in moves.iter().enumerate() {
        println!(
            "  {:<5} {:<8} {:<5} {:<5} {:<4} {:<4} {:<6.1} {:<7.3} {:<7} {:<10} {}",
            offset + i + 1,
            m.key,
            m.tile,
            m.hex,
            m.row,
            m.col,
            m.distance,
            m.win_rate,
            m.games_played,
            format_chains(&m.p1_chains),
            format_chains(&m.p2_chains)
        );
    }
}

fn print_groups(label: &str, groups: &[GroupSummary]) {
    print_subsection(&format!("Performance by {label}"));
    for g in groups {
        println!(
            "  {label} {:2}: Avg WR={:.3}, Games={:6}, Best={} ({:.3}), Worst={} ({:.3})",
            g.value, g.average_win_rate, g.total_games, g.best, g.best_win_rate, g.worst, g.worst_win_rate
        );
    }
}

pub fn analyze(policy: &Path, config: &AnalysisConfig) -> Result<()> {
    let document = load_policy(policy)?;
    let geometry = HexBoardGeometry::standard();
    let report = opening_analysis(&document.database, &geometry)?;

    print_section("OPENING MOVE ANALYSIS");
    print_kv("Opening moves", &report.moves.len().to_string());
    print_kv("Centre hex", &geometry.center().to_string());

    let n = config.top_n.min(report.moves.len());
    print_subsection(&format!("Top {n} opening moves"));
    print_moves(&report.moves[..n], 0);
    print_subsection(&format!("Bottom {n} opening moves"));
    let start = report.moves.len() - n;
    print_moves(&report.moves[start..], start);

    print_groups("Row", &report.by_row);
    print_groups("Col", &report.by_col);
    print_groups("Tile", &report.by_tile);
    print_groups("Hex", &report.by_hex);

    print_subsection("Performance by distance from the centre");
    for b in &report.by_distance {
        let label = match b.band {
            DistanceBand::Adjacent => "Adjacent (<= 1.5)",
            DistanceBand::Medium => "Medium (1.5-3.0)",
            DistanceBand::Far => "Far (> 3.0)",
        };
        println!(
            "  {label:<20}: Avg WR={:.3}, Total games={}, Count={}",
            b.average_win_rate,
            format_number(b.total_games),
            b.count
        );
    }

    if let Some(tiles) = &report.tile_value {
        print_section("TILE VALUE");
        print_kv("Mean tile WR", &format!("{:.3}", tiles.mean));
        print_kv("Std deviation", &format!("{:.3}", tiles.std_dev));
        for (rank, t) in tiles.rankings.iter().enumerate() {
            let verdict = match t.verdict {
                TileVerdict::AboveAverage => "Above average",
                TileVerdict::Average => "Average",
                TileVerdict::BelowAverage => "Below average",
            };
            println!(
                "  {:2}. Tile {}: Avg WR={:.3}, Games={:6}  {verdict}",
                rank + 1,
                t.tile,
                t.average_win_rate,
                t.total_games
            );
        }
        println!();
        print_kv("High tiles (7-9)", &format!("{:.3}", tiles.high_band));
        print_kv("Mid tiles (4-6)", &format!("{:.3}", tiles.mid_band));
        print_kv("Low tiles (1-3)", &format!("{:.3}", tiles.low_band));
        let effect = match tiles.effect {
            TileEffect::Negligible => "tile value does not significantly matter",
            TileEffect::Minor => "tile value has a minor effect",
            TileEffect::Significant => "tile value matters",
        };
        print_kv(
            "High vs low",
            &format!("{:.3} ({effect})", (tiles.high_band - tiles.low_band).abs()),
        );
        print_kv("Largest tile difference", &format!("{:.3}", tiles.max_difference));
    }

    print_section("CHAINS THROUGH HEXES ADJACENT TO THE CENTRE");
    for c in &report.chains {
        println!(
            "  P{} chain {}: hexes {:?}, Avg WR={:.3}, Games={}, Best={}",
            c.player, c.chain, c.hexes, c.average_win_rate, c.total_games, c.best
        );
    }
    Ok(())
}
