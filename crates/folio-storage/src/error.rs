//! Error types for folio-storage

use thiserror::Error;

/// Errors that can occur while reading or writing a slot
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error while touching the backing file
    #[error("I/O error: {0}")]
    Io(String),

    /// The slot map could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backing file exists but does not hold a valid slot map
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl StorageError {
    /// Create a new Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a new Deserialization error
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization(message.into())
    }
}
