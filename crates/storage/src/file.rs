use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain::BookKeeper;
use tokio::fs;

use crate::{BookKeeperStorage, JsonSerializableBookKeeper, Result};

/// Keeps the book in a single pretty-printed JSON file.
///
/// Saves are written to a sibling `.tmp` file and renamed into place.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl BookKeeperStorage for JsonFileStorage {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn read_book_keeper(&self) -> Result<Option<BookKeeper>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("data file not found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let data: JsonSerializableBookKeeper = serde_json::from_str(&raw)?;
        let book = data.into_model()?;
        tracing::debug!(
            clients = book.clients().len(),
            orders = book.order_count(),
            "book loaded"
        );
        Ok(Some(book))
    }

    #[tracing::instrument(skip(self, book), fields(path = %self.path.display()))]
    async fn save_book_keeper(&self, book: &BookKeeper) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&JsonSerializableBookKeeper::from_model(book))?;
        let temp = self.temp_path();
        fs::write(&temp, json).await?;
        fs::rename(&temp, &self.path).await?;

        metrics::counter!("storage_saves_total").increment(1);
        tracing::debug!(
            clients = book.clients().len(),
            orders = book.order_count(),
            "book saved"
        );
        Ok(())
    }
}
