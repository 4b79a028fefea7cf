//! Decode command - explain a state key or move key

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    board::{Cell, ChainSet, HexBoardGeometry, HexIndexing, MoveKey, Owner, StateKey},
    cli::output::{format_chains, print_kv, print_section},
    types::HexId,
};

#[derive(Parser, Debug)]
#[command(about = "Decode a state key or move key")]
pub struct DecodeArgs {
    /// State key (`turn|cells|...`) or move key (`t<tile>h<hex>`)
    pub key: String,
}

/// Draw the board row by row, each cell as `value`/`owner`, `.` when empty.
pub fn render_board(state: &StateKey, geometry: &HexBoardGeometry) -> String {
    let mut out = String::new();
    for row in 0..9 {
        out.push_str("  ");
        for col in 0..5 {
            let text = match geometry.hex_at(row, col) {
                Some(hex) => match state.cell(hex) {
                    Cell::Empty => "  .  ".to_string(),
                    Cell::Tile { value, owner } => {
                        let tag = match owner {
                            Owner::Neutral => 'N',
                            Owner::Player1 => 'A',
                            Owner::Player2 => 'B',
                        };
                        format!(" {value}{tag}  ")
                    }
                },
                None => "     ".to_string(),
            };
            out.push_str(&text);
        }
        out.push('\n');
    }
    out
}

fn print_move(mv: &MoveKey) {
    print_section(&format!("MOVE {mv}"));
    print_kv("Tile", &mv.tile.to_string());
    print_kv("Raw hex number", &mv.hex.to_string());

    let geometry = HexBoardGeometry::standard();
    for indexing in [HexIndexing::ZeroBased, HexIndexing::OneBased] {
        let label = format!("{indexing:?} board hex");
        match mv.board_hex(indexing) {
            Ok(hex) => {
                let coord = geometry.coords(hex);
                print_kv(
                    &label,
                    &format!(
                        "{hex} (row {}, col {}), P1 chains {}, P2 chains {}",
                        coord.row,
                        coord.col,
                        format_chains(&ChainSet::player1().containing(hex.index())),
                        format_chains(&ChainSet::player2().containing(hex.index()))
                    ),
                );
            }
            Err(_) => print_kv(&label, "off the board"),
        }
    }
}

fn print_state(state: &StateKey) -> Result<()> {
    let geometry = HexBoardGeometry::standard();
    print_section("STATE");
    print_kv("Turn", &state.turn.to_string());
    print_kv("Occupied cells", &state.count_occupied().to_string());
    print_kv("Empty cells", &state.empty_count().to_string());
    match state.neutral_hex() {
        Some(index) => print_kv("Neutral tile at", &HexId::new(index)?.to_string()),
        None => print_kv("Neutral tile at", "none"),
    }
    print_kv("P1 available", &format!("{:?}", state.available_tiles(Owner::Player1)?));
    print_kv("P2 available", &format!("{:?}", state.available_tiles(Owner::Player2)?));
    print_kv("P1 used", &format!("{:?}", state.used_positions(Owner::Player1)?));
    print_kv("P2 used", &format!("{:?}", state.used_positions(Owner::Player2)?));
    print_kv("P1 chain score", &ChainSet::player1().score(state).to_string());
    print_kv("P2 chain score", &ChainSet::player2().score(state).to_string());
    println!("\n{}", render_board(state, &geometry));
    Ok(())
}

pub fn execute(args: DecodeArgs) -> Result<()> {
    if let Ok(mv) = MoveKey::decode(&args.key) {
        print_move(&mv);
        return Ok(());
    }
    let state = StateKey::decode(&args.key)
        .with_context(|| format!("'{}' is neither a move key nor a state key", args.key))?;
    print_state(&state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_opening_board() {
        let state = StateKey::decode(
            "1|null,null,null,null,null,null,null,null,null,1p0,null,null,null,null,null,null,null,null,null|p1a:123456789|p2a:123456789|p1u:|p2u:",
        )
        .unwrap();
        let board = render_board(&state, &HexBoardGeometry::standard());
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[4].contains("1N"));
        assert_eq!(board.matches('.').count(), 18);
    }

    #[test]
    fn test_unknown_key_is_error() {
        let result = execute(DecodeArgs {
            key: "not a key".to_string(),
        });
        assert!(result.is_err());
    }
}
