//! Errors - エラー型と分類
//!
//! # 分類
//! - 回復可能（このランをスキップ）: MissingInput, InsufficientCandidates
//! - それ以外: 呼び出し元に返す（CLI は非ゼロ終了）
//!
//! どちらの場合も、永続化済みの状態は書き換えません。

use thiserror::Error;

use super::config::ConfigError;
use super::outcome::SkipReason;
use crate::ports::{FetchError, StorageError};

/// RotationError は月次ローテーションの失敗
#[derive(Debug, Error)]
pub enum RotationError {
    #[error("missing input: {key}")]
    MissingInput { key: String },

    #[error("insufficient candidates: {available} eligible, {required} required")]
    InsufficientCandidates { available: usize, required: usize },

    #[error("sampler returned an invalid draw: {0}")]
    InvalidDraw(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RotationError {
    /// true なら「このランはスキップ」で済む（状態は未変更）
    ///
    /// 判定は `SkipReason::from_error` に一本化
    pub fn is_recoverable(&self) -> bool {
        SkipReason::from_error(self).is_some()
    }
}

/// JobError はスナップショット取得ジョブの失敗
#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("encode metadata: {0}")]
    Encode(#[from] serde_json::Error),
}
