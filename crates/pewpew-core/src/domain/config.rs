//! Configuration for the monthly rotation.
//!
//! - `LevelConfig`: the persisted `config.json` document (static exclusions).
//! - `RotationSettings`: where the artifacts live and how many levels to draw.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::ids::LevelId;
use super::rotation::{DEFAULT_SELECTION_COUNT, HISTORY_CAPACITY};

pub const DEFAULT_CONFIG_KEY: &str = "config.json";
pub const DEFAULT_CANDIDATES_KEY: &str = "data/github_data/level_data.csv";
pub const DEFAULT_ACTIVE_KEY: &str = "data/monthly_lb/levels.txt";
pub const DEFAULT_HISTORY_KEY: &str = "data/monthly_lb/banned_levels.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config {key}: {source}")]
    Invalid {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// `config.json` の内容
///
/// 未知のフィールドは無視します。`exclude` が無ければ空扱い。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelConfig {
    #[serde(default)]
    exclude: Vec<String>,
}

impl LevelConfig {
    pub fn parse(key: &str, bytes: &[u8]) -> Result<Self, ConfigError> {
        serde_json::from_slice(bytes).map_err(|source| ConfigError::Invalid {
            key: key.to_string(),
            source,
        })
    }

    /// Levels permanently excluded from every rotation.
    pub fn always_excluded(&self) -> HashSet<LevelId> {
        self.exclude
            .iter()
            .filter_map(|raw| LevelId::parse(raw))
            .collect()
    }
}

/// Explicit settings for one rotation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationSettings {
    pub config_key: String,
    pub candidates_key: String,
    pub active_key: String,
    pub history_key: String,

    /// K: number of levels drawn per run.
    pub count: usize,

    pub history_capacity: usize,
}

impl RotationSettings {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            config_key: DEFAULT_CONFIG_KEY.to_string(),
            candidates_key: DEFAULT_CANDIDATES_KEY.to_string(),
            active_key: DEFAULT_ACTIVE_KEY.to_string(),
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            count: DEFAULT_SELECTION_COUNT,
            history_capacity: HISTORY_CAPACITY,
        }
    }
}
