//! In-memory policy repository for testing.
//!
//! Documents are kept as JSON text keyed by path, so loading exercises the
//! same deserialization as the file adapter without touching the disk.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Result,
    error::Error,
    policy::{OpeningBook, PolicyDocument},
    ports::PolicyRepository,
};

/// In-memory repository for testing.
///
/// # Examples
///
/// ```
/// use hexuki::adapters::InMemoryRepository;
/// use hexuki::ports::PolicyRepository;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// repo.insert_json("book.json", r#"{"openings": {}}"#);
/// let book = repo.load_opening_book(Path::new("book.json"))?;
/// assert!(book.openings.is_empty());
/// # Ok::<(), hexuki::Error>(())
/// ```
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // a panic while holding the lock cannot leave a half-written entry
        self.storage.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store raw JSON text under `path`.
    pub fn insert_json(&self, path: impl AsRef<Path>, json: impl Into<String>) {
        let key = path.as_ref().to_string_lossy().to_string();
        self.storage().insert(key, json.into());
    }

    pub fn count(&self) -> usize {
        self.storage().len()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(path.to_string_lossy().as_ref())
    }

    fn get(&self, path: &Path) -> Result<String> {
        self.storage()
            .get(path.to_string_lossy().as_ref())
            .cloned()
            .ok_or_else(|| Error::Io {
                operation: format!("load document from in-memory storage at {path:?}"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
            })
    }
}

impl PolicyRepository for InMemoryRepository {
    fn load_policy(&self, path: &Path) -> Result<PolicyDocument> {
        Ok(serde_json::from_str(&self.get(path)?)?)
    }

    fn load_opening_book(&self, path: &Path) -> Result<OpeningBook> {
        Ok(serde_json::from_str(&self.get(path)?)?)
    }

    fn save_policy(&self, document: &PolicyDocument, path: &Path) -> Result<()> {
        let json = serde_json::to_string(document)?;
        self.insert_json(path, json);
        Ok(())
    }
}
