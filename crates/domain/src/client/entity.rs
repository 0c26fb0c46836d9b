//! Client entity.

use std::collections::BTreeSet;

use common::{ClientId, OrderId};

use crate::error::{ModelError, Result};
use crate::order::Order;

use super::{Address, Email, Name, Phone, Tag};

/// A contact in the book, together with the orders placed by them.
///
/// Every change to the order set produces a new `Client`; the old value is
/// swapped out by the owning list. The `id` survives those swaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    orders: Vec<Order>,
}

impl Client {
    /// Creates a client with no orders.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self::with_id(ClientId::new(), name, phone, email, address, tags)
    }

    /// Creates a client with a known id, e.g. when loading from storage.
    pub fn with_id(
        id: ClientId,
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            id,
            name,
            phone,
            email,
            address,
            tags,
            orders: Vec::new(),
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Orders in the sequence they were added.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Returns the order with `order_id`, if this client holds it.
    pub fn order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.check_id(order_id))
    }

    pub fn has_order(&self, order_id: OrderId) -> bool {
        self.order(order_id).is_some()
    }

    /// Returns true if both clients have the same name.
    ///
    /// This is the identity used for uniqueness in the client list, which is
    /// weaker than full equality.
    pub fn is_same_client(&self, other: &Client) -> bool {
        self.name == other.name
    }

    /// Returns a new client holding `order` as well.
    ///
    /// The order is attached to this client on the way in.
    pub fn add_order(&self, mut order: Order) -> Result<Client> {
        if self.has_order(order.order_id()) {
            return Err(ModelError::DuplicateOrder {
                order_id: order.order_id(),
            });
        }
        order.attach_client(self)?;

        let mut edited = self.clone();
        edited.orders.push(order);
        Ok(edited)
    }

    /// Returns a new client with `old` replaced by `new`, in place.
    pub fn edit_order(&self, old: &Order, mut new: Order) -> Result<Client> {
        let position = self
            .orders
            .iter()
            .position(|o| o == old)
            .ok_or(ModelError::OrderNotFound {
                order_id: old.order_id(),
            })?;

        if new.order_id() != old.order_id() && self.has_order(new.order_id()) {
            return Err(ModelError::DuplicateOrder {
                order_id: new.order_id(),
            });
        }
        new.attach_client(self)?;

        let mut edited = self.clone();
        edited.orders[position] = new;
        Ok(edited)
    }

    /// Returns a new client without the order carrying `order_id`.
    ///
    /// Fails if no such order exists.
    pub fn remove_order(&self, order_id: OrderId) -> Result<Client> {
        let position = self
            .orders
            .iter()
            .position(|o| o.check_id(order_id))
            .ok_or(ModelError::OrderNotFound { order_id })?;

        let mut edited = self.clone();
        edited.orders.remove(position);
        Ok(edited)
    }
}

impl std::fmt::Display for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        write!(f, "; Orders: {}", self.orders.len())
    }
}
