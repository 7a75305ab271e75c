//! Storage port - フラットな成果物の読み書き
//!
//! key は data ディレクトリからの相対パス（例: `data/monthly_lb/levels.txt`）。
//!
//! # 実装
//! - **FsStorage**: ファイルシステム（本番用）
//! - **InMemoryStorage**: テスト・開発用

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{key} not found")]
    NotFound { key: String },

    #[error("{key} is not valid UTF-8")]
    InvalidUtf8 { key: String },

    #[error("i/o error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

/// Storage は key 単位で bytes を丸ごと読み書きする
///
/// # 設計原則
/// - write は常に全体上書き（マージしない）
/// - 存在しない key の read は `StorageError::NotFound`
/// - 存在しない key の remove は成功扱い
pub trait Storage: Send + Sync {
    fn read(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// 存在しなければ None
    fn read_optional(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match self.read(key) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(StorageError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn read_text(&self, key: &str) -> Result<String, StorageError> {
        let bytes = self.read(key)?;
        String::from_utf8(bytes).map_err(|_| StorageError::InvalidUtf8 {
            key: key.to_string(),
        })
    }
}
