//! InMemoryStorage - 開発・テスト用の Storage

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{Storage, StorageError};

/// HashMap<key, bytes> をそのまま保持する Storage
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期ファイルを追加（builder 形式）
    pub fn with_file(self, key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.lock().insert(key.to_string(), bytes.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().get(key).cloned()
    }

    pub fn get_text(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// 全ファイルのコピー（前後比較用）
    pub fn snapshot(&self) -> HashMap<String, Vec<u8>> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.files
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for InMemoryStorage {
    fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.get(key).ok_or_else(|| StorageError::NotFound {
            key: key.to_string(),
        })
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}
