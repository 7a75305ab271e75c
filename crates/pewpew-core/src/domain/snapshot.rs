//! Snapshot files mirrored from the remote data repository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directory (storage key prefix) holding the mirrored CSV snapshots.
pub const SNAPSHOT_DIR: &str = "data/github_data";

/// The snapshot tables, fetched and stored under the same file name.
pub const SNAPSHOT_FILES: [&str; 3] = ["account_data.csv", "level_data.csv", "score_data.csv"];

pub const METADATA_FILE: &str = "metadata.json";

pub fn snapshot_key(file: &str) -> String {
    format!("{SNAPSHOT_DIR}/{file}")
}

/// `metadata.json` の内容（timestamp のみ）
///
/// timestamp は Unix 秒（小数部あり）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub timestamp: f64,
}

impl SnapshotMetadata {
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            timestamp: time.timestamp_micros() as f64 / 1_000_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_keeps_fractional_seconds() {
        let time = Utc.timestamp_opt(1_704_110_400, 250_000_000).unwrap();
        let metadata = SnapshotMetadata::at(time);
        assert_eq!(metadata.timestamp, 1_704_110_400.25);
    }

    #[test]
    fn serializes_only_timestamp() {
        let metadata = SnapshotMetadata { timestamp: 1.5 };
        let value = serde_json::to_value(metadata).unwrap();
        assert_eq!(value, serde_json::json!({ "timestamp": 1.5 }));
    }

    #[test]
    fn keys_live_under_snapshot_dir() {
        assert_eq!(snapshot_key("level_data.csv"), "data/github_data/level_data.csv");
    }
}
