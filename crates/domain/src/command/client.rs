//! Client and list commands.

use common::Index;

use crate::book::BookKeeper;
use crate::client::Client;
use crate::model::Model;
use crate::order::Status;
use crate::predicate::{name_contains_keywords, show_all_clients, show_all_orders, status_is};

use super::{Command, CommandError, CommandResult};

/// Adds a new client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddClientCommand {
    client: Client,
}

impl AddClientCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub const MESSAGE_USAGE: &'static str = "add: Adds a client to the book.\n\
         Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
         Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2 t/friends";

    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Command for AddClientCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    #[tracing::instrument(skip(model))]
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_client(&self.client) {
            return Err(CommandError::DuplicateClient);
        }
        model.add_client(self.client.clone())?;
        Ok(CommandResult::new(format!(
            "New client added: {}",
            self.client
        )))
    }
}

/// Deletes a client, and with it all of the client's orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteClientCommand {
    target_index: Index,
}

impl DeleteClientCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the client identified by the index number used in the \
         displayed client list, together with the client's orders.\n\
         Parameters: INDEX (must be a positive integer)\n\
         Example: delete 1";

    pub fn new(target_index: Index) -> Self {
        Self { target_index }
    }
}

impl Command for DeleteClientCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    #[tracing::instrument(skip(model))]
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_client_list()
            .get(self.target_index.zero_based())
            .map(|c| (*c).clone())
            .ok_or(CommandError::InvalidClientIndex)?;

        model.delete_client(&target)?;
        Ok(CommandResult::new(format!("Deleted Client: {target}")))
    }
}

/// Shows every client and every order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";

    pub const MESSAGE_USAGE: &'static str = "list: Shows all clients and all orders.\n\
         Example: list";
}

impl Command for ListCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_client_list(show_all_clients());
        model.update_filtered_order_list(show_all_orders());
        Ok(CommandResult::new("Listed all clients and orders"))
    }
}

/// Shows clients whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";

    pub const MESSAGE_USAGE: &'static str = "find: Finds all clients whose names contain any of the given keywords \
         (case-insensitive).\n\
         Parameters: KEYWORD [MORE_KEYWORDS]...\n\
         Example: find alice bob";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_client_list(name_contains_keywords(self.keywords.clone()));
        let shown = model.filtered_client_list().len();
        Ok(CommandResult::new(format!("{shown} clients listed!")))
    }
}

/// Shows orders in a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOrdersCommand {
    status: Status,
}

impl FilterOrdersCommand {
    pub const COMMAND_WORD: &'static str = "filterOrder";

    pub const MESSAGE_USAGE: &'static str = "filterOrder: Shows the orders with the given status.\n\
         Parameters: STATUS (pending, completed or cancelled)\n\
         Example: filterOrder pending";

    pub fn new(status: Status) -> Self {
        Self { status }
    }
}

impl Command for FilterOrdersCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_order_list(status_is(self.status));
        let shown = model.filtered_order_list().len();
        Ok(CommandResult::new(format!("{shown} orders listed!")))
    }
}

/// Removes every client and order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";

    pub const MESSAGE_USAGE: &'static str = "clear: Removes every client and order.\n\
         Example: clear";
}

impl Command for ClearCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    #[tracing::instrument(skip(model))]
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.set_book_keeper(&BookKeeper::new());
        Ok(CommandResult::new("Book keeper has been cleared!"))
    }
}
