use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use domain::BookKeeper;
use tokio::sync::RwLock;

use crate::{BookKeeperStorage, JsonSerializableBookKeeper, Result};

/// In-memory storage for testing.
///
/// Holds the same JSON document the file storage would write, so loads go
/// through the same validation path.
#[derive(Clone, Default)]
pub struct InMemoryBookKeeperStorage {
    document: Arc<RwLock<Option<String>>>,
    saves: Arc<AtomicUsize>,
}

impl InMemoryBookKeeperStorage {
    /// Creates an empty storage; reads return `None` until the first save.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-loaded with a raw JSON document.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(json.into()))),
            saves: Arc::default(),
        }
    }

    /// Returns the last saved document, if any.
    pub async fn json(&self) -> Option<String> {
        self.document.read().await.clone()
    }

    /// Returns how many times the book has been saved.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookKeeperStorage for InMemoryBookKeeperStorage {
    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn read_book_keeper(&self) -> Result<Option<BookKeeper>> {
        let document = self.document.read().await;
        match document.as_deref() {
            None => Ok(None),
            Some(json) => {
                let data: JsonSerializableBookKeeper = serde_json::from_str(json)?;
                Ok(Some(data.into_model()?))
            }
        }
    }

    async fn save_book_keeper(&self, book: &BookKeeper) -> Result<()> {
        let json = serde_json::to_string(&JsonSerializableBookKeeper::from_model(book))?;
        *self.document.write().await = Some(json);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
