//! Session state seen by commands.

use crate::book::BookKeeper;
use crate::client::Client;
use crate::error::Result;
use crate::order::Order;
use crate::predicate::{Predicate, show_all_clients, show_all_orders};

/// Everything a command may read or change.
///
/// Writes are forwarded to the [`BookKeeper`]; the filters only affect what
/// the `filtered_*` views return and are never persisted.
pub trait Model: Send + Sync {
    /// Returns the underlying book.
    fn book_keeper(&self) -> &BookKeeper;

    /// Replaces the underlying book with a copy of `book`.
    fn set_book_keeper(&mut self, book: &BookKeeper);

    fn has_client(&self, client: &Client) -> bool;

    fn add_client(&mut self, client: Client) -> Result<()>;

    fn delete_client(&mut self, target: &Client) -> Result<()>;

    fn set_client(&mut self, target: &Client, edited: Client) -> Result<()>;

    fn set_client_and_add_order(
        &mut self,
        target: &Client,
        edited: Client,
        order: &Order,
    ) -> Result<()>;

    fn set_client_and_edit_order(
        &mut self,
        target: &Client,
        edited: Client,
        old: &Order,
        new: &Order,
    ) -> Result<()>;

    fn set_client_and_delete_order(
        &mut self,
        target: &Client,
        edited: Client,
        removed: &Order,
    ) -> Result<()>;

    /// Clients passing the current client filter.
    fn filtered_client_list(&self) -> Vec<&Client>;

    /// Orders passing the current order filter.
    fn filtered_order_list(&self) -> Vec<&Order>;

    fn update_filtered_client_list(&mut self, predicate: Predicate<Client>);

    fn update_filtered_order_list(&mut self, predicate: Predicate<Order>);
}

/// The in-memory [`Model`] used by the application.
pub struct ModelManager {
    book_keeper: BookKeeper,
    client_filter: Predicate<Client>,
    order_filter: Predicate<Order>,
}

impl ModelManager {
    /// Creates a model over `book_keeper` with both filters showing everything.
    pub fn new(book_keeper: BookKeeper) -> Self {
        tracing::debug!(%book_keeper, "initializing model");
        Self {
            book_keeper,
            client_filter: show_all_clients(),
            order_filter: show_all_orders(),
        }
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(BookKeeper::new())
    }
}

impl std::fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelManager")
            .field("book_keeper", &self.book_keeper)
            .finish_non_exhaustive()
    }
}

impl Model for ModelManager {
    fn book_keeper(&self) -> &BookKeeper {
        &self.book_keeper
    }

    fn set_book_keeper(&mut self, book: &BookKeeper) {
        self.book_keeper.reset_data(book);
    }

    fn has_client(&self, client: &Client) -> bool {
        self.book_keeper.has_client(client)
    }

    fn add_client(&mut self, client: Client) -> Result<()> {
        self.book_keeper.add_client(client)?;
        self.update_filtered_client_list(show_all_clients());
        Ok(())
    }

    fn delete_client(&mut self, target: &Client) -> Result<()> {
        self.book_keeper.remove_client(target)?;
        Ok(())
    }

    fn set_client(&mut self, target: &Client, edited: Client) -> Result<()> {
        self.book_keeper.set_client(target, edited)
    }

    fn set_client_and_add_order(
        &mut self,
        target: &Client,
        edited: Client,
        order: &Order,
    ) -> Result<()> {
        self.book_keeper
            .set_client_and_add_order(target, edited, order)?;
        tracing::debug!(order_id = %order.order_id(), client = %target.name(), "order added");
        Ok(())
    }

    fn set_client_and_edit_order(
        &mut self,
        target: &Client,
        edited: Client,
        old: &Order,
        new: &Order,
    ) -> Result<()> {
        self.book_keeper
            .set_client_and_edit_order(target, edited, old, new)?;
        tracing::debug!(order_id = %new.order_id(), client = %target.name(), "order edited");
        Ok(())
    }

    fn set_client_and_delete_order(
        &mut self,
        target: &Client,
        edited: Client,
        removed: &Order,
    ) -> Result<()> {
        self.book_keeper
            .set_client_and_delete_order(target, edited, removed)?;
        tracing::debug!(order_id = %removed.order_id(), client = %target.name(), "order deleted");
        Ok(())
    }

    fn filtered_client_list(&self) -> Vec<&Client> {
        self.book_keeper
            .clients()
            .iter()
            .filter(|c| (self.client_filter)(*c))
            .collect()
    }

    fn filtered_order_list(&self) -> Vec<&Order> {
        self.book_keeper
            .orders()
            .filter(|o| (self.order_filter)(*o))
            .collect()
    }

    fn update_filtered_client_list(&mut self, predicate: Predicate<Client>) {
        self.client_filter = predicate;
    }

    fn update_filtered_order_list(&mut self, predicate: Predicate<Order>) {
        self.order_filter = predicate;
    }
}
