//! Commands: single-shot state transitions against a [`Model`].
//!
//! Every command validates against the model first and only then writes, so
//! a failed command leaves the model untouched.

mod client;
mod order;

pub use client::{
    AddClientCommand, ClearCommand, DeleteClientCommand, FilterOrdersCommand, FindCommand,
    ListCommand,
};
pub use order::{AddOrderCommand, DeleteOrderCommand, EditOrderCommand, EditOrderDescriptor};

use thiserror::Error;

use crate::error::ModelError;
use crate::model::Model;

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user.
    pub feedback_to_user: String,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
        }
    }
}

/// Reasons a command refuses to run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Index outside the displayed client list.
    #[error("The client index provided is invalid")]
    InvalidClientIndex,

    /// Index outside the displayed order list.
    #[error("The order index provided is invalid")]
    InvalidOrderIndex,

    /// No client holds an order with the given id.
    #[error("The order id provided is invalid")]
    InvalidOrderId,

    /// The order is listed but no client holds it.
    #[error("Failed to find the client associated with this order!")]
    NoAssociatedClient,

    /// A client with the same identity already exists.
    #[error("This client already exists in the book")]
    DuplicateClient,

    /// An edit carried no field to change.
    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    /// The book rejected the change.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A unit of work executed against the model.
pub trait Command: std::fmt::Debug + Send + Sync {
    /// Word that invokes this command.
    fn command_word(&self) -> &'static str;

    /// Runs the command. On error nothing in `model` has changed.
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError>;
}
