//! Analysis configuration shared across commands

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, error::Error, policy::SOLVED_WEIGHT_THRESHOLD};

/// Thresholds and list sizes used by the analysis commands.
///
/// Loaded from a JSON file with `--config`; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Rows shown in ranked listings
    pub top_n: usize,

    /// Win rate above which an action counts as strong
    pub high_win_rate: f64,

    /// Win rate below which an action counts as weak
    pub low_win_rate: f64,

    /// States with at most this many empty cells are endgames
    pub endgame_empty_threshold: usize,

    /// Deepest move depth examined by the depth analysis
    pub depth_limit: usize,

    /// Most-explored states shown per depth
    pub states_per_depth: usize,

    /// Win-rate change reported as a regression or improvement
    pub change_threshold: f64,

    /// Average weight at which a move counts as solver-chosen
    pub solved_weight_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            high_win_rate: 0.6,
            low_win_rate: 0.4,
            endgame_empty_threshold: 6,
            depth_limit: 4,
            states_per_depth: 3,
            change_threshold: 0.1,
            solved_weight_threshold: SOLVED_WEIGHT_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {path:?}"),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Load `path` if given, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// See [`AnalysisConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::load(path)?;
                log::debug!("loaded configuration from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"top_n": 5, "solved_weight_threshold": 1.5}"#).unwrap();

        let config = AnalysisConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.solved_weight_threshold, 1.5);
        assert_eq!(config.endgame_empty_threshold, 6);
        assert_eq!(config.change_threshold, 0.1);
    }

    #[test]
    fn test_no_path_gives_defaults() {
        let config = AnalysisConfig::load_or_default(None).unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.solved_weight_threshold, 1.9);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(AnalysisConfig::load(Path::new("/tmp/missing_hexuki_config.json")).is_err());
    }
}
