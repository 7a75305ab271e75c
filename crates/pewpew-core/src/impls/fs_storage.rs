//! FsStorage - data ディレクトリ配下のファイルとして保存

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::{Storage, StorageError};

/// ルートディレクトリからの相対パスを key とする Storage
///
/// # 書き込み
/// - 親ディレクトリは必要に応じて作成
/// - `<name>.tmp` に書いてから rename（途中で落ちても旧ファイルは壊れない）
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

fn io_error(key: &str, source: io::Error) -> StorageError {
    if source.kind() == io::ErrorKind::NotFound {
        StorageError::NotFound {
            key: key.to_string(),
        }
    } else {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl Storage for FsStorage {
    fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        fs::read(self.path(key)).map_err(|e| io_error(key, e))
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path(key);
        let to_storage_error = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(to_storage_error)?;
        }

        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, bytes).map_err(to_storage_error)?;
        fs::rename(&tmp, &path).map_err(to_storage_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(io_error(key, e)),
            _ => Ok(()),
        }
    }
}
