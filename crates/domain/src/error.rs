//! Domain error types.

use common::OrderId;
use thiserror::Error;

/// Raw input rejected by a value-object constructor.
///
/// The message is fixed per field so the parsing layer can show it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Name of the field that failed validation.
    pub field: &'static str,

    /// Constraint message for the field.
    pub message: &'static str,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Errors raised by the client list and the entities it owns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A client with the same identity already exists.
    #[error("Client already exists: {name}")]
    DuplicateClient { name: String },

    /// The client to replace or remove is not in the list.
    #[error("Client not found: {name}")]
    ClientNotFound { name: String },

    /// The client already holds an order with this id.
    #[error("Order already exists: {order_id}")]
    DuplicateOrder { order_id: OrderId },

    /// No order with this id is held by the client.
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: OrderId },

    /// The order is already attached to a different client.
    #[error("Order {order_id} is already attached to another client")]
    OrderAttachedElsewhere { order_id: OrderId },

    /// The supplied order change does not match the client replacement.
    #[error("Order change for {order_id} does not match the client update: {reason}")]
    OrderDeltaMismatch {
        order_id: OrderId,
        reason: &'static str,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
