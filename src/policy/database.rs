//! Policy database documents
//!
//! A policy file maps state keys to per-move statistics. State order in the
//! file is meaningful (the trainer writes the opening position first), so the
//! database keeps entries in file order alongside a key index.

use std::{collections::HashMap, fmt};

use indexmap::IndexMap;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use super::stats::ActionStats;
use crate::{
    Error, Result,
    board::{MoveKey, StateKey},
};

/// Move key → statistics for one state, in file order.
pub type ActionTable = IndexMap<String, ActionStats>;

/// One state and its recorded actions.
#[derive(Debug, Clone, PartialEq)]
pub struct StateEntry {
    pub key: String,
    pub actions: ActionTable,
}

impl StateEntry {
    pub fn new(key: impl Into<String>, actions: ActionTable) -> Self {
        Self {
            key: key.into(),
            actions,
        }
    }

    /// Decode the raw state key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedStateKey`] if the key does not parse.
    pub fn state(&self) -> Result<StateKey> {
        StateKey::decode(&self.key)
    }

    /// Sum of games played across all actions.
    pub fn total_games(&self) -> u64 {
        self.actions.values().map(|a| a.games_played).sum()
    }

    /// Decode every move key of this state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedMoveKey`] on the first undecodable move.
    pub fn moves(&self) -> Result<Vec<(MoveKey, &ActionStats)>> {
        self.actions
            .iter()
            .map(|(key, stats)| MoveKey::decode(key).map(|mv| (mv, stats)))
            .collect()
    }
}

/// State key → action table, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyDatabase {
    entries: Vec<StateEntry>,
    index: HashMap<String, usize>,
}

impl PolicyDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a state; new states go to the end.
    pub fn insert(&mut self, key: impl Into<String>, actions: ActionTable) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].actions = actions,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(StateEntry::new(key, actions));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&StateEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Look up a state, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateNotFound`] if the key is not in the database.
    pub fn require(&self, key: &str) -> Result<&StateEntry> {
        self.get(key).ok_or_else(|| Error::StateNotFound {
            key: key.to_string(),
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = &StateEntry> {
        self.entries.iter()
    }

    /// The first state in file order, which the trainer writes for the
    /// opening position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPolicy`] if the database has no states.
    pub fn opening_state(&self) -> Result<&StateEntry> {
        self.entries.first().ok_or(Error::EmptyPolicy)
    }

    /// Every (state, move, stats) triple.
    pub fn actions(&self) -> impl Iterator<Item = (&StateEntry, &str, &ActionStats)> {
        self.entries.iter().flat_map(|entry| {
            entry
                .actions
                .iter()
                .map(move |(mv, stats)| (entry, mv.as_str(), stats))
        })
    }

    pub fn action_count(&self) -> usize {
        self.entries.iter().map(|e| e.actions.len()).sum()
    }
}

impl FromIterator<(String, ActionTable)> for PolicyDatabase {
    fn from_iter<I: IntoIterator<Item = (String, ActionTable)>>(iter: I) -> Self {
        let mut database = PolicyDatabase::new();
        for (key, actions) in iter {
            database.insert(key, actions);
        }
        database
    }
}

impl Serialize for PolicyDatabase {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.actions)?;
        }
        map.end()
    }
}

struct DatabaseVisitor;

impl<'de> Visitor<'de> for DatabaseVisitor {
    type Value = PolicyDatabase;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map from state keys to action tables")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut database = PolicyDatabase::new();
        if let Some(size) = access.size_hint() {
            database.entries.reserve(size);
            database.index.reserve(size);
        }
        while let Some((key, actions)) = access.next_entry::<String, ActionTable>()? {
            database.insert(key, actions);
        }
        Ok(database)
    }
}

impl<'de> Deserialize<'de> for PolicyDatabase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(DatabaseVisitor)
    }
}

/// A complete policy file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    pub database: PolicyDatabase,
    #[serde(default)]
    pub total_games_played: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}
