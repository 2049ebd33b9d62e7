//! File-backed storage
//!
//! One JSON file per storage key inside the data directory
//! (`budgets.json`, `expenses.json`), replaced atomically on every write.

use std::path::PathBuf;

use tracing::debug;

use crate::config::paths::TicclePaths;
use crate::error::StorageError;

use super::file_io::{read_if_exists, write_atomic};
use super::port::{Storage, StorageKey};

/// Storage backend that keeps each collection in its own JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Store files inside `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store files inside the configured data directory
    pub fn from_paths(paths: &TicclePaths) -> Self {
        Self::new(paths.data_dir())
    }

    /// The file a key is stored in
    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl Storage for FileStorage {
    fn read_bytes(&self, key: StorageKey) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key);
        read_if_exists(&path).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{}: {}", path.display(), e),
        })
    }

    fn write_bytes(&self, key: StorageKey, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key);
        write_atomic(&path, bytes).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{}: {}", path.display(), e),
        })?;
        debug!(key = %key, bytes = bytes.len(), path = %path.display(), "wrote collection");
        Ok(())
    }
}
