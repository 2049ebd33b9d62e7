//! The storage port
//!
//! Persists whole serializable collections under a logical key, the way a
//! local preferences store would. Backends only move bytes; encoding and
//! decoding happen here so every backend reports the same errors.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

/// Logical keys the application stores collections under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Budgets,
    Expenses,
}

impl StorageKey {
    /// The logical name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budgets => "budgets",
            Self::Expenses => "expenses",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key-value store for serialized collections
///
/// Implementors provide `read_bytes` and `write_bytes`. A write must
/// replace the previous value atomically: after a failed write the old
/// value is still readable, and after a successful one the next read in
/// the same process sees the new value.
pub trait Storage: Send + Sync {
    /// Raw bytes stored under `key`, or `None` if nothing was stored
    fn read_bytes(&self, key: StorageKey) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the bytes stored under `key`
    fn write_bytes(&self, key: StorageKey, bytes: &[u8]) -> Result<(), StorageError>;

    /// Serialize `value` and store it under `key`, replacing any prior value
    fn save<T>(&self, value: &T, key: StorageKey) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec_pretty(value).map_err(|e| StorageError::Encoding {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.write_bytes(key, &bytes)
    }

    /// Load and deserialize the value stored under `key`
    fn load<T>(&self, key: StorageKey) -> Result<T, StorageError>
    where
        T: DeserializeOwned,
    {
        let bytes = self.read_bytes(key)?.ok_or_else(|| StorageError::NotFound {
            key: key.to_string(),
        })?;
        serde_json::from_slice(&bytes).map_err(|e| StorageError::Decoding {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}
