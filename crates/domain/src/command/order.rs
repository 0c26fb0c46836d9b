//! Order commands.

use common::{Index, OrderId};

use crate::model::Model;
use crate::order::{Deadline, Order, OrderDate, Price, Remark, Status};
use crate::predicate::show_all_orders;

use super::{Command, CommandError, CommandResult};

/// Adds an order to a client picked from the displayed client list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOrderCommand {
    index: Index,
    order: Order,
}

impl AddOrderCommand {
    pub const COMMAND_WORD: &'static str = "order";

    pub const MESSAGE_USAGE: &'static str = "order: Creates an order that is associated to a client. \
         Existing orders of the client are kept.\n\
         Parameters: INDEX (must be a positive integer) d/DETAILS c/PRICE by/DEADLINE\n\
         Example: order 1 d/1xRoses c/40 by/23-07-2024 00:00";

    pub fn new(index: Index, order: Order) -> Self {
        Self { index, order }
    }
}

impl Command for AddOrderCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    #[tracing::instrument(skip(model))]
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_client_list()
            .get(self.index.zero_based())
            .map(|c| (*c).clone())
            .ok_or(CommandError::InvalidClientIndex)?;

        let mut order = self.order.clone();
        order.attach_client(&target)?;
        let edited = target.add_order(order.clone())?;

        model.set_client_and_add_order(&target, edited, &order)?;
        model.update_filtered_order_list(show_all_orders());

        Ok(CommandResult::new(format!(
            "New Order added! {}",
            target.name()
        )))
    }
}

/// Fields to overwrite on an order. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOrderDescriptor {
    pub order_date: Option<OrderDate>,
    pub deadline: Option<Deadline>,
    pub price: Option<Price>,
    pub remark: Option<Remark>,
    pub status: Option<Status>,
}

impl EditOrderDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order_date(mut self, order_date: OrderDate) -> Self {
        self.order_date = Some(order_date);
        self
    }

    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_remark(mut self, remark: Remark) -> Self {
        self.remark = Some(remark);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if at least one field is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.order_date.is_some()
            || self.deadline.is_some()
            || self.price.is_some()
            || self.remark.is_some()
            || self.status.is_some()
    }

    /// Builds the edited copy of `order`.
    pub fn apply_to(&self, order: &Order) -> Order {
        order.with_changes(
            self.order_date,
            self.deadline,
            self.price,
            self.remark.clone(),
            self.status,
        )
    }
}

/// Edits an order picked from the displayed order list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOrderCommand {
    target_index: Index,
    descriptor: EditOrderDescriptor,
}

impl EditOrderCommand {
    pub const COMMAND_WORD: &'static str = "editOrder";

    pub const MESSAGE_USAGE: &'static str = "editOrder: Edits the details of the order identified \
         by the index number used in the displayed order list. \
         Existing values will be overwritten by the input values.\n\
         Parameters: INDEX (must be a positive integer) [date/DATE] [by/DEADLINE] [c/PRICE] \
         [d/REMARK] [s/STATUS]\n\
         Example: editOrder 1 c/60";

    pub fn new(target_index: Index, descriptor: EditOrderDescriptor) -> Self {
        Self {
            target_index,
            descriptor,
        }
    }
}

impl Command for EditOrderCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    #[tracing::instrument(skip(model))]
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let order_to_edit = model
            .filtered_order_list()
            .get(self.target_index.zero_based())
            .map(|o| (*o).clone())
            .ok_or(CommandError::InvalidOrderIndex)?;

        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NothingToEdit);
        }

        let client_to_edit = model
            .book_keeper()
            .clients()
            .iter()
            .find(|c| c.orders().contains(&order_to_edit))
            .cloned()
            .ok_or_else(|| {
                tracing::warn!(
                    order_id = %order_to_edit.order_id(),
                    "listed order has no owning client"
                );
                CommandError::NoAssociatedClient
            })?;

        let mut edited_order = self.descriptor.apply_to(&order_to_edit);
        edited_order.attach_client(&client_to_edit)?;
        let edited_client = client_to_edit.edit_order(&order_to_edit, edited_order.clone())?;

        model.set_client_and_edit_order(
            &client_to_edit,
            edited_client,
            &order_to_edit,
            &edited_order,
        )?;
        model.update_filtered_order_list(show_all_orders());

        Ok(CommandResult::new(format!("Edited Order: {edited_order}")))
    }
}

/// Deletes the order with a given id, wherever it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOrderCommand {
    order_id: OrderId,
}

impl DeleteOrderCommand {
    pub const COMMAND_WORD: &'static str = "deleteOrder";

    pub const MESSAGE_USAGE: &'static str = "deleteOrder: Deletes the order identified by its id.\n\
         Parameters: id/ORDER_ID\n\
         Example: deleteOrder id/<UUID>";

    pub fn new(order_id: OrderId) -> Self {
        Self { order_id }
    }
}

impl Command for DeleteOrderCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    #[tracing::instrument(skip(model))]
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let (client_to_edit, removed) = model
            .book_keeper()
            .find_order(self.order_id)
            .map(|(c, o)| (c.clone(), o.clone()))
            .ok_or(CommandError::InvalidOrderId)?;

        let edited_client = client_to_edit.remove_order(self.order_id)?;
        model.set_client_and_delete_order(&client_to_edit, edited_client, &removed)?;

        Ok(CommandResult::new(format!("Deleted Order: {removed}")))
    }
}
