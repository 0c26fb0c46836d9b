use async_trait::async_trait;
use domain::BookKeeper;

use crate::Result;

/// Core trait for places the book can be kept.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait BookKeeperStorage: Send + Sync {
    /// Human-readable location of the data, for logs.
    fn location(&self) -> String;

    /// Reads the book.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet. Orders come back
    /// attached to the client they were saved under.
    async fn read_book_keeper(&self) -> Result<Option<BookKeeper>>;

    /// Saves the whole book, replacing what was there.
    async fn save_book_keeper(&self, book: &BookKeeper) -> Result<()>;
}
