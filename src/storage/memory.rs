//! In-memory storage
//!
//! A process-local key-value store with the same contract as the file
//! backend. Used for tests and for embedding the stores without a disk.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StorageError;

use super::port::{Storage, StorageKey};

/// Storage backend that keeps serialized collections in memory
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<StorageKey, Vec<u8>>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes under a key, bypassing serialization
    ///
    /// Lets callers seed a store with data from elsewhere, including data
    /// that won't decode.
    pub fn insert_raw(&self, key: StorageKey, bytes: impl Into<Vec<u8>>) -> Result<(), StorageError> {
        self.write_bytes(key, &bytes.into())
    }
}

impl Storage for MemoryStorage {
    fn read_bytes(&self, key: StorageKey) -> Result<Option<Vec<u8>>, StorageError> {
        let entries = self.entries.read().map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("Failed to acquire read lock: {}", e),
        })?;
        Ok(entries.get(&key).cloned())
    }

    fn write_bytes(&self, key: StorageKey, bytes: &[u8]) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("Failed to acquire write lock: {}", e),
        })?;
        entries.insert(key, bytes.to_vec());
        Ok(())
    }
}
