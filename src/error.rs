//! Custom error types for Ticcle
//!
//! Two layers: `StorageError` is what a storage backend reports, and
//! `TiccleError` is what the stores, services and CLI handlers return.

use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// The value could not be serialized
    #[error("Failed to encode '{key}': {reason}")]
    Encoding { key: String, reason: String },

    /// The stored bytes could not be deserialized into the expected shape
    #[error("Failed to decode '{key}': {reason}")]
    Decoding { key: String, reason: String },

    /// The underlying medium rejected the write
    #[error("Failed to write '{key}': {reason}")]
    Write { key: String, reason: String },

    /// The underlying medium failed while reading
    #[error("Failed to read '{key}': {reason}")]
    Read { key: String, reason: String },

    /// Nothing has been stored under the key yet
    #[error("No value stored for '{key}'")]
    NotFound { key: String },
}

/// The main error type for Ticcle operations
#[derive(Error, Debug)]
pub enum TiccleError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage port errors, passed through unchanged
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A store's internal lock was poisoned by a panicking writer
    #[error("Lock poisoned: {0}")]
    Lock(String),
}

impl TiccleError {
    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TiccleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TiccleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Ticcle operations
pub type TiccleResult<T> = Result<T, TiccleError>;
