use domain::CommandError;
use storage::StorageError;
use thiserror::Error;

/// Errors surfaced to whoever drives the logic manager.
#[derive(Debug, Error)]
pub enum LogicError {
    /// The command was rejected; the book is unchanged.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The command ran but the book could not be saved.
    #[error("Could not save data to file: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, LogicError>;
