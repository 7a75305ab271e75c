//! Events - ドメインイベント
//!
//! ジョブは EventSink 経由でイベントを通知します。ログ出力はシンク側の責務です。

use serde::Serialize;

use super::ids::LevelId;
use super::outcome::SkipReason;

/// DomainEvent はジョブの進行・結果を表す
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Rotation inputs were read.
    CandidatesLoaded {
        candidates: usize,
        always_excluded: usize,
        history: usize,
    },

    /// A new rotation was persisted.
    LevelsSelected {
        levels: Vec<LevelId>,
        evicted: Vec<LevelId>,
    },

    RotationSkipped {
        reason: SkipReason,
    },

    /// A job failed with a non-recoverable error.
    RunFailed {
        job: &'static str,
        error: String,
    },

    SnapshotFetched {
        file: String,
        bytes: usize,
    },

    MetadataWritten {
        timestamp: f64,
    },

    ReportWritten {
        key: String,
    },
}
