use thiserror::Error;

/// Errors that can occur when reading or writing the book.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The data file could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The data is not valid JSON, or a field failed validation.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The data parsed but breaks a book invariant.
    #[error("Illegal value: {0}")]
    IllegalValue(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
