//! Common fixtures for the hexuki test suite.
//!
//! Policy JSON is written out by hand because key order in the file matters:
//! the first state is the opening position.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rand::{Rng, rngs::StdRng};

pub const OPENING_KEY: &str = "1|null,null,null,null,null,null,null,null,null,1p0,null,null,null,null,null,null,null,null,null|p1a:123456789|p2a:123456789|p1u:|p2u:";

/// Player 1 placed tile 1 on hex 7.
pub const AFTER_T1H7: &str = "2|null,null,null,null,null,null,null,1p1,null,1p0,null,null,null,null,null,null,null,null,null|p1a:23456789|p2a:123456789|p1u:7|p2u:";

/// Six empty cells left. Sorts before [`OPENING_KEY`] lexicographically.
pub const ENDGAME_KEY: &str = "13|1p1,2p2,3p1,4p2,5p1,6p2,7p1,8p2,9p1,1p0,1p2,2p1,3p2,null,null,null,null,null,null|p1a:23|p2a:4|p1u:0,2,4,6,8,11|p2u:1,3,5,7,10,12";

fn action(games: u64, weight: f64, wins: f64) -> String {
    format!(
        r#"{{"gamesPlayed": {games}, "totalWeight": {weight}, "wins": {wins}, "losses": {}, "ties": 0}}"#,
        weight - wins
    )
}

/// A small three-state policy: opening, one reply position and one endgame.
pub fn sample_policy_json() -> String {
    format!(
        r#"{{
  "database": {{
    "{OPENING_KEY}": {{
      "t1h7": {},
      "t2h11": {},
      "t3h4": {},
      "t3h14": {}
    }},
    "{AFTER_T1H7}": {{
      "t1h10": {},
      "t4h14": {}
    }},
    "{ENDGAME_KEY}": {{
      "t9h18": {}
    }}
  }},
  "totalGamesPlayed": 10,
  "trainingMethod": "random_minimax",
  "created": "2025-10-20T03:12:30.516Z"
}}"#,
        action(10, 10.0, 7.0),
        action(10, 10.0, 5.0),
        action(10, 10.0, 4.0),
        action(10, 10.0, 6.0),
        action(6, 6.0, 3.0),
        action(4, 4.0, 1.0),
        action(2, 4.0, 4.0),
    )
}

/// Same opening state with shifted win rates and one new move.
pub fn later_policy_json() -> String {
    format!(
        r#"{{
  "database": {{
    "{OPENING_KEY}": {{
      "t1h7": {},
      "t2h11": {},
      "t3h4": {},
      "t5h6": {}
    }}
  }},
  "totalGamesPlayed": 40
}}"#,
        action(40, 40.0, 22.0),
        action(40, 40.0, 21.0),
        action(40, 40.0, 20.0),
        action(40, 40.0, 20.0),
    )
}

pub fn sample_book_json() -> String {
    r#"{
  "totalGames": 300,
  "gamesPerOpening": 100,
  "minimaxThreshold": 6,
  "openings": {
    "t1h7": {"tile": 1, "hexId": 7, "games": 100, "wins": 74, "losses": 26, "ties": 0},
    "t3h14": {"tile": 3, "hexId": 14, "games": 100, "wins": 61, "losses": 38, "ties": 1},
    "t2h6": {"games": 100, "wins": 55, "losses": 45, "ties": 0}
  }
}"#
    .to_string()
}

pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}

fn random_digits(rng: &mut StdRng) -> String {
    (1..=9)
        .filter(|_| rng.random_bool(0.6))
        .map(|d: u32| char::from_digit(d, 10).unwrap_or('1'))
        .collect()
}

fn random_positions(rng: &mut StdRng) -> String {
    let count = rng.random_range(0..6);
    (0..count)
        .map(|_| rng.random_range(0..19u32).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// A canonical state key with a random board, turn and tile payloads.
pub fn random_state_key(rng: &mut StdRng) -> String {
    let cells: Vec<String> = (0..19)
        .map(|index| {
            if index == 9 {
                "1p0".to_string()
            } else if rng.random_bool(0.5) {
                "null".to_string()
            } else {
                format!("{}p{}", rng.random_range(1..=9u8), rng.random_range(1..=2u8))
            }
        })
        .collect();
    format!(
        "{}|{}|p1a:{}|p2a:{}|p1u:{}|p2u:{}",
        rng.random_range(1..=18u32),
        cells.join(","),
        random_digits(rng),
        random_digits(rng),
        random_positions(rng),
        random_positions(rng),
    )
}
