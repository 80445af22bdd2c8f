//! Error types for mode store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or rewriting the modes record.
#[derive(Debug, Error)]
pub enum ModeStoreError {
    /// The database file does not exist at the given or discovered path.
    #[error("state database not found: {}", path.display())]
    StorageNotFound { path: PathBuf },

    /// No default database location could be discovered.
    #[error("could not locate state.vscdb; pass its path explicitly with --db")]
    StorageNotLocated,

    /// The database exists but the application state key is absent.
    #[error("application state key not found in the database")]
    KeyNotFound,

    /// An imported mode object is missing a required field or has a bad value.
    #[error("invalid mode: field '{field}' {reason}")]
    Validation { field: String, reason: String },

    /// No mode with the requested id exists.
    #[error("mode with id '{id}' not found")]
    NotFound { id: String },

    /// Built-in modes can never be deleted.
    #[error("cannot delete built-in mode '{id}'")]
    BuiltinProtected { id: String },

    /// The stored document does not have the expected shape.
    #[error("malformed application state: {0}")]
    MalformedDocument(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ModeStoreError {
    /// Builds a validation error for a required field that is absent.
    pub fn missing_field(field: &str) -> Self {
        ModeStoreError::Validation {
            field: field.to_string(),
            reason: "is required".to_string(),
        }
    }

    /// Returns true for the startup conditions where no operation can run.
    pub fn is_storage_missing(&self) -> bool {
        matches!(
            self,
            ModeStoreError::StorageNotFound { .. } | ModeStoreError::StorageNotLocated
        )
    }
}

/// Convenience alias used across the store.
pub type Result<T> = std::result::Result<T, ModeStoreError>;
