//! Error types for the Hexuki policy toolkit

use thiserror::Error;

/// Main error type for the hexuki crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("malformed state key '{key}': {reason}")]
    MalformedStateKey { key: String, reason: String },

    #[error("malformed move key '{key}' (expected format: 't<tile>h<hex>')")]
    MalformedMoveKey { key: String },

    #[error("hex {hex} is out of bounds (must be 0-18)")]
    InvalidHex { hex: usize },

    #[error("tile value {value} is out of bounds (must be 1-9)")]
    InvalidTile { value: u32 },

    #[error("state '{key}' not found in policy")]
    StateNotFound { key: String },

    #[error("no position after opening move '{opening}' in policy")]
    NoSuccessor { opening: String },

    #[error("policy database contains no states")]
    EmptyPolicy,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

impl Error {
    pub(crate) fn malformed_state(key: &str, reason: impl Into<String>) -> Self {
        Error::MalformedStateKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
