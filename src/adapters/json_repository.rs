//! JSON file implementation of the policy repository.
//!
//! This is the format the training engine writes. Files are parsed in full;
//! policy tables of tens of megabytes fit comfortably in memory.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::de::DeserializeOwned;

use crate::{
    Result,
    error::Error,
    policy::{OpeningBook, PolicyDocument},
    ports::PolicyRepository,
};

/// JSON-file-backed repository.
///
/// # Examples
///
/// ```no_run
/// use hexuki::adapters::JsonRepository;
/// use hexuki::ports::PolicyRepository;
/// use std::path::Path;
///
/// let repo = JsonRepository::new();
/// let policy = repo.load_policy(Path::new("hexuki_policy.json"))?;
/// println!("{} states", policy.database.len());
/// # Ok::<(), hexuki::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    pub fn new() -> Self {
        Self
    }

    fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;
        let value = serde_json::from_reader(BufReader::new(file))?;
        Ok(value)
    }
}

impl PolicyRepository for JsonRepository {
    fn load_policy(&self, path: &Path) -> Result<PolicyDocument> {
        let document: PolicyDocument = Self::read(path)?;
        log::debug!(
            "parsed {} states ({} actions) from {}",
            document.database.len(),
            document.database.action_count(),
            path.display()
        );
        Ok(document)
    }

    fn load_opening_book(&self, path: &Path) -> Result<OpeningBook> {
        let book: OpeningBook = Self::read(path)?;
        log::debug!("parsed {} openings from {}", book.openings.len(), path.display());
        Ok(book)
    }

    fn save_policy(&self, document: &PolicyDocument, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        serde_json::to_writer(BufWriter::new(file), document)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::policy::{ActionStats, ActionTable};

    fn sample_document() -> PolicyDocument {
        let mut actions = ActionTable::new();
        actions.insert(
            "t1h7".to_string(),
            ActionStats {
                games_played: 4,
                total_weight: 4.0,
                wins: 3.0,
                losses: 1.0,
                ties: 0.0,
            },
        );
        let mut document = PolicyDocument {
            total_games_played: 4,
            training_method: Some("random_minimax".to_string()),
            ..Default::default()
        };
        document.database.insert("state", actions);
        document
    }

    #[test]
    fn test_json_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("policy.json");

        let repo = JsonRepository::new();
        let document = sample_document();
        repo.save_policy(&document, &file_path).expect("Failed to save");
        let loaded = repo.load_policy(&file_path).expect("Failed to load");

        assert_eq!(loaded, document);
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = JsonRepository::new();
        let result = repo.load_policy(Path::new("/tmp/nonexistent_hexuki_12345.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_invalid_json_returns_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("broken.json");
        std::fs::write(&file_path, "{\"database\": [").unwrap();

        let result = JsonRepository::new().load_policy(&file_path);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_load_opening_book() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("book.json");
        std::fs::write(
            &file_path,
            r#"{"totalGames": 100, "gamesPerOpening": 100, "minimaxThreshold": 6,
                "openings": {"t1h7": {"tile": 1, "hexId": 7, "games": 100, "wins": 74, "losses": 26, "ties": 0}}}"#,
        )
        .unwrap();

        let book = JsonRepository::new().load_opening_book(&file_path).unwrap();
        assert_eq!(book.total_games, 100);
        assert_eq!(book.openings.len(), 1);
    }
}
