//! Runs commands against the model and keeps storage in step with it.

use std::time::Instant;

use domain::{BookKeeper, Client, Command, CommandResult, Model, ModelManager, Order};
use storage::BookKeeperStorage;

use crate::error::Result;
use crate::sample::sample_book_keeper;

/// Owns the model and saves it after every successful command.
pub struct LogicManager<S: BookKeeperStorage> {
    model: ModelManager,
    storage: S,
}

impl<S: BookKeeperStorage> LogicManager<S> {
    pub fn new(model: ModelManager, storage: S) -> Self {
        Self { model, storage }
    }

    /// Loads the book from `storage`.
    ///
    /// With no saved data the book starts from sample data (or empty, when
    /// `use_sample_data` is false). Data that cannot be read is logged and
    /// the book starts empty; nothing is written until the next command.
    #[tracing::instrument(skip(storage), fields(location = %storage.location()))]
    pub async fn load(storage: S, use_sample_data: bool) -> Self {
        let book = match storage.read_book_keeper().await {
            Ok(Some(book)) => {
                tracing::info!(
                    clients = book.clients().len(),
                    orders = book.order_count(),
                    "loaded book"
                );
                book
            }
            Ok(None) if use_sample_data => {
                tracing::info!("no data found, starting with sample data");
                sample_book_keeper().unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "sample data rejected, starting empty");
                    BookKeeper::new()
                })
            }
            Ok(None) => {
                tracing::info!("no data found, starting empty");
                BookKeeper::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "data could not be loaded, starting empty");
                BookKeeper::new()
            }
        };

        Self::new(ModelManager::new(book), storage)
    }

    /// Executes `command` and saves the book if it succeeded.
    ///
    /// A rejected command leaves both the model and storage untouched.
    #[tracing::instrument(skip(self, command), fields(command = command.command_word()))]
    pub async fn execute(&mut self, command: &dyn Command) -> Result<CommandResult> {
        let word = command.command_word();
        let started = Instant::now();

        let result = match command.execute(&mut self.model) {
            Ok(result) => result,
            Err(e) => {
                metrics::counter!("commands_failed_total", "command" => word).increment(1);
                tracing::debug!(error = %e, "command rejected");
                return Err(e.into());
            }
        };

        metrics::counter!("commands_executed_total", "command" => word).increment(1);
        metrics::histogram!("command_duration_seconds", "command" => word)
            .record(started.elapsed().as_secs_f64());
        tracing::debug!(feedback = %result.feedback_to_user, "command executed");

        self.storage.save_book_keeper(self.model.book_keeper()).await?;
        Ok(result)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn book_keeper(&self) -> &BookKeeper {
        self.model.book_keeper()
    }

    pub fn filtered_client_list(&self) -> Vec<&Client> {
        self.model.filtered_client_list()
    }

    pub fn filtered_order_list(&self) -> Vec<&Order> {
        self.model.filtered_order_list()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: BookKeeperStorage> std::fmt::Debug for LogicManager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogicManager")
            .field("model", &self.model)
            .field("location", &self.storage.location())
            .finish()
    }
}
