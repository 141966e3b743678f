//! Error types for key-value storage operations.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted state.
///
/// None of these are fatal: callers fall back to in-memory state and
/// surface a warning.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage backend cannot be reached (no window, disabled storage)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Reading a key failed
    #[error("Failed to read '{key}': {message}")]
    Read {
        /// Key being read
        key: String,
        /// Backend-specific description
        message: String,
    },

    /// Writing a key failed (quota exceeded, read-only backend)
    #[error("Failed to write '{key}': {message}")]
    Write {
        /// Key being written
        key: String,
        /// Backend-specific description
        message: String,
    },

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error from a file-backed store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create a read error for `key`.
    pub fn read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a write error for `key`.
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            message: message.into(),
        }
    }
}
