//! The book: all clients and, through them, all orders.

mod unique_client_list;

pub use unique_client_list::UniqueClientList;

use common::OrderId;

use crate::client::Client;
use crate::error::{ModelError, Result};
use crate::order::Order;

/// Owner of every client in the application.
///
/// The client list is the only stored collection. The global order list is
/// a flattened view over it (clients in list order, each client's orders in
/// insertion order), so it cannot drift from the per-client order sets. The
/// `set_client_and_*` operations still take the order change explicitly and
/// reject it, before touching anything, when it does not match the
/// difference between `target` and `edited`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookKeeper {
    clients: UniqueClientList,
}

impl BookKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book holding `clients`.
    pub fn from_clients(clients: Vec<Client>) -> Result<Self> {
        let mut book = Self::new();
        book.set_clients(clients)?;
        Ok(book)
    }

    // List overwrite operations

    /// Replaces all clients. `clients` must not contain duplicates.
    pub fn set_clients(&mut self, clients: Vec<Client>) -> Result<()> {
        self.clients.set_clients(clients)
    }

    /// Replaces the contents of this book with a copy of `other`.
    pub fn reset_data(&mut self, other: &BookKeeper) {
        self.clients = other.clients.clone();
    }

    // Client-level operations

    pub fn has_client(&self, client: &Client) -> bool {
        self.clients.contains(client)
    }

    /// Adds a client. Fails if a client with the same identity exists.
    pub fn add_client(&mut self, client: Client) -> Result<()> {
        self.clients.add(client)
    }

    /// Removes `target` together with all of its orders.
    pub fn remove_client(&mut self, target: &Client) -> Result<Client> {
        self.clients.remove(target)
    }

    /// Replaces `target` with `edited`.
    pub fn set_client(&mut self, target: &Client, edited: Client) -> Result<()> {
        self.clients.set_client(target, edited)
    }

    /// Replaces `target` with `edited`, where `edited` gained `order`.
    pub fn set_client_and_add_order(
        &mut self,
        target: &Client,
        edited: Client,
        order: &Order,
    ) -> Result<()> {
        let order_id = order.order_id();
        if target.has_order(order_id) {
            return Err(mismatch(order_id, "order already belongs to the client"));
        }
        if edited.order(order_id) != Some(order) {
            return Err(mismatch(order_id, "updated client does not hold the new order"));
        }
        self.clients.set_client(target, edited)
    }

    /// Replaces `target` with `edited`, where `old` became `new`.
    pub fn set_client_and_edit_order(
        &mut self,
        target: &Client,
        edited: Client,
        old: &Order,
        new: &Order,
    ) -> Result<()> {
        if target.order(old.order_id()) != Some(old) {
            return Err(mismatch(old.order_id(), "client does not hold the order to edit"));
        }
        if edited.order(new.order_id()) != Some(new) {
            return Err(mismatch(new.order_id(), "updated client does not hold the edited order"));
        }
        if new.order_id() != old.order_id() && edited.has_order(old.order_id()) {
            return Err(mismatch(old.order_id(), "updated client still holds the old order"));
        }
        self.clients.set_client(target, edited)
    }

    /// Replaces `target` with `edited`, where `removed` is gone.
    pub fn set_client_and_delete_order(
        &mut self,
        target: &Client,
        edited: Client,
        removed: &Order,
    ) -> Result<()> {
        let order_id = removed.order_id();
        if target.order(order_id) != Some(removed) {
            return Err(mismatch(order_id, "client does not hold the order to delete"));
        }
        if edited.has_order(order_id) {
            return Err(mismatch(order_id, "updated client still holds the deleted order"));
        }
        self.clients.set_client(target, edited)
    }

    // Queries

    pub fn clients(&self) -> &[Client] {
        self.clients.as_slice()
    }

    /// Every order of every client.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.clients.iter().flat_map(|c| c.orders().iter())
    }

    pub fn order_count(&self) -> usize {
        self.clients.iter().map(|c| c.orders().len()).sum()
    }

    /// Finds an order by id along with the client that holds it.
    pub fn find_order(&self, order_id: OrderId) -> Option<(&Client, &Order)> {
        self.clients
            .iter()
            .find_map(|c| c.order(order_id).map(|o| (c, o)))
    }

    /// Resolves the back-reference of `order` to its client.
    pub fn client_of(&self, order: &Order) -> Option<&Client> {
        let client_id = order.client_id()?;
        self.clients.iter().find(|c| c.id() == client_id)
    }
}

fn mismatch(order_id: OrderId, reason: &'static str) -> ModelError {
    ModelError::OrderDeltaMismatch { order_id, reason }
}

impl std::fmt::Display for BookKeeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} clients, {} orders",
            self.clients.len(),
            self.order_count()
        )
    }
}
