//! CSV export of opening moves
//!
//! One row per opening move of a policy, best first, with its board position
//! and chain membership so the table can be pivoted in a spreadsheet.

use std::{fs::File, io::Write, path::Path};

use serde::Serialize;

use crate::{Result, analysis::OpeningMove, error::Error};

/// A single row in the opening CSV export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningCsvRecord {
    #[serde(rename = "move")]
    pub key: String,
    pub tile: u32,
    pub hex: usize,
    pub row: u8,
    pub col: u8,
    pub win_rate: f64,
    pub games: u64,
    pub wins: f64,
    pub losses: f64,
    /// Space-separated 1-indexed chain numbers.
    pub p1_chains: String,
    pub p2_chains: String,
}

fn join_chains<'a>(chains: impl IntoIterator<Item = &'a usize>) -> String {
    chains
        .into_iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<&OpeningMove> for OpeningCsvRecord {
    fn from(m: &OpeningMove) -> Self {
        Self {
            key: m.key.clone(),
            tile: m.tile,
            hex: m.hex,
            row: m.row,
            col: m.col,
            win_rate: m.win_rate,
            games: m.games_played,
            wins: m.wins,
            losses: m.losses,
            p1_chains: join_chains(&m.p1_chains),
            p2_chains: join_chains(&m.p2_chains),
        }
    }
}

/// Write opening moves as CSV to any writer, header first.
///
/// # Errors
///
/// Returns [`Error::Csv`] if a record cannot be written.
pub fn write_openings<W: Write>(moves: &[OpeningMove], writer: W) -> Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    for m in moves {
        csv.serialize(OpeningCsvRecord::from(m))?;
    }
    csv.flush()?;
    Ok(moves.len())
}

/// Write opening moves to a CSV file. Returns the number of rows written.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_openings(moves: &[OpeningMove], path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create file {path:?}"),
        source,
    })?;
    let rows = write_openings(moves, file)?;
    log::info!("wrote {rows} opening rows to {}", path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use tempfile::TempDir;

    use super::*;

    fn opening_move() -> OpeningMove {
        OpeningMove {
            key: "t1h7".to_string(),
            tile: 1,
            hex: 7,
            row: 3,
            col: 3,
            distance: 1.414,
            win_rate: 0.74,
            games_played: 100,
            wins: 74.0,
            losses: 26.0,
            p1_chains: BTreeSet::from([2]),
            p2_chains: BTreeSet::from([3]),
        }
    }

    #[test]
    fn test_write_openings_header_and_row() {
        let mut buffer = Vec::new();
        let rows = write_openings(&[opening_move()], &mut buffer).unwrap();
        assert_eq!(rows, 1);

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("move,tile,hex,row,col,win_rate,games,wins,losses,p1_chains,p2_chains")
        );
        assert_eq!(lines.next(), Some("t1h7,1,7,3,3,0.74,100,74.0,26.0,2,3"));
    }

    #[test]
    fn test_export_openings_to_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("openings.csv");
        export_openings(&[opening_move(), opening_move()], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.records().count(), 2);
    }
}
