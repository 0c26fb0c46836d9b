//! Filters for the displayed client and order lists.

use std::sync::Arc;

use common::ClientId;

use crate::client::Client;
use crate::order::{Order, Status};

/// A shareable filter over list entries.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Filter that keeps every client.
pub fn show_all_clients() -> Predicate<Client> {
    Arc::new(|_| true)
}

/// Filter that keeps every order.
pub fn show_all_orders() -> Predicate<Order> {
    Arc::new(|_| true)
}

/// Keeps clients whose name contains any of `keywords` as a whole word,
/// ignoring case.
pub fn name_contains_keywords(keywords: Vec<String>) -> Predicate<Client> {
    let keywords: Vec<String> = keywords.into_iter().map(|k| k.to_lowercase()).collect();
    Arc::new(move |client: &Client| {
        client
            .name()
            .as_str()
            .split_whitespace()
            .any(|word| keywords.iter().any(|k| *k == word.to_lowercase()))
    })
}

/// Keeps orders in the given status.
pub fn status_is(status: Status) -> Predicate<Order> {
    Arc::new(move |order: &Order| order.status() == status)
}

/// Keeps orders placed by the given client.
pub fn placed_by(client_id: ClientId) -> Predicate<Order> {
    Arc::new(move |order: &Order| order.client_id() == Some(client_id))
}
