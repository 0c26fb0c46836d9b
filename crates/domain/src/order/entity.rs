//! Order entity.

use common::{ClientId, OrderId};

use crate::client::Client;
use crate::error::{ModelError, Result};

use super::{Deadline, OrderDate, Price, Remark, Status};

/// An order placed by a client.
///
/// Orders are values: an edit builds a new `Order` with the same id. The
/// owning client is recorded by id only and resolved through the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    order_id: OrderId,
    order_date: OrderDate,
    deadline: Deadline,
    price: Price,
    remark: Remark,
    status: Status,
    client: Option<ClientId>,
}

impl Order {
    /// Creates an order from its parts. The client is attached separately.
    pub fn new(
        order_id: OrderId,
        order_date: OrderDate,
        deadline: Deadline,
        price: Price,
        remark: Remark,
        status: Status,
    ) -> Self {
        Self {
            order_id,
            order_date,
            deadline,
            price,
            remark,
            status,
            client: None,
        }
    }

    /// Creates a new pending order placed now, with a fresh id.
    pub fn place(deadline: Deadline, price: Price, remark: Remark) -> Self {
        Self::new(
            OrderId::new(),
            OrderDate::now(),
            deadline,
            price,
            remark,
            Status::Pending,
        )
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn order_date(&self) -> OrderDate {
        self.order_date
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the id of the owning client, once attached.
    pub fn client_id(&self) -> Option<ClientId> {
        self.client
    }

    /// Returns true if the order is attached to a client.
    pub fn is_attached(&self) -> bool {
        self.client.is_some()
    }

    /// Returns true if this order carries `order_id`.
    pub fn check_id(&self, order_id: OrderId) -> bool {
        self.order_id == order_id
    }

    /// Records `client` as the owner of this order.
    ///
    /// Attaching to the same client again is a no-op; attaching to a
    /// different one fails.
    pub fn attach_client(&mut self, client: &Client) -> Result<()> {
        match self.client {
            Some(existing) if existing != client.id() => Err(ModelError::OrderAttachedElsewhere {
                order_id: self.order_id,
            }),
            _ => {
                self.client = Some(client.id());
                Ok(())
            }
        }
    }

    /// Returns a copy of this order with the given fields replaced.
    ///
    /// The id and the client back-reference are always kept.
    pub fn with_changes(
        &self,
        order_date: Option<OrderDate>,
        deadline: Option<Deadline>,
        price: Option<Price>,
        remark: Option<Remark>,
        status: Option<Status>,
    ) -> Self {
        Self {
            order_id: self.order_id,
            order_date: order_date.unwrap_or(self.order_date),
            deadline: deadline.unwrap_or(self.deadline),
            price: price.unwrap_or(self.price),
            remark: remark.unwrap_or_else(|| self.remark.clone()),
            status: status.unwrap_or(self.status),
            client: self.client,
        }
    }
}

// The client is left out so that a client listing its orders prints cleanly.
impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Ordered: {}; Deadline: {}; Price: {}; Remark: {}; Status: {}",
            self.order_id, self.order_date, self.deadline, self.price, self.remark, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{Address, Email, Name, Phone};

    fn roses() -> Order {
        Order::new(
            OrderId::new(),
            OrderDate::parse("01-07-2024 09:30").unwrap(),
            Deadline::parse("23-07-2024 00:00").unwrap(),
            Price::parse("40").unwrap(),
            Remark::parse("1xRoses").unwrap(),
            Status::Pending,
        )
    }

    fn client(name: &str) -> Client {
        Client::new(
            Name::parse(name).unwrap(),
            Phone::parse("94351253").unwrap(),
            Email::parse("alice@example.com").unwrap(),
            Address::parse("123, Jurong West Ave 6").unwrap(),
            Default::default(),
        )
    }

    #[test]
    fn test_check_id() {
        let order = roses();
        assert!(order.check_id(order.order_id()));
        assert!(!order.check_id(OrderId::new()));
    }

    #[test]
    fn test_place_starts_pending_and_unattached() {
        let order = Order::place(
            Deadline::parse("23-07-2024 00:00").unwrap(),
            Price::parse("40").unwrap(),
            Remark::parse("1xRoses").unwrap(),
        );
        assert_eq!(order.status(), Status::Pending);
        assert!(!order.is_attached());
    }

    #[test]
    fn test_attach_client_is_idempotent() {
        let alice = client("Alice");
        let mut order = roses();
        order.attach_client(&alice).unwrap();
        order.attach_client(&alice).unwrap();
        assert_eq!(order.client_id(), Some(alice.id()));
    }

    #[test]
    fn test_attach_client_rejects_second_owner() {
        let mut order = roses();
        order.attach_client(&client("Alice")).unwrap();
        let err = order.attach_client(&client("Bob")).unwrap_err();
        assert_eq!(
            err,
            ModelError::OrderAttachedElsewhere {
                order_id: order.order_id()
            }
        );
    }

    #[test]
    fn test_with_changes_keeps_id_and_untouched_fields() {
        let order = roses();
        let edited = order.with_changes(None, None, Some(Price::parse("60").unwrap()), None, None);
        assert_eq!(edited.order_id(), order.order_id());
        assert_eq!(edited.price().cents(), 6000);
        assert_eq!(edited.remark(), order.remark());
        assert_eq!(edited.deadline(), order.deadline());
        assert_ne!(edited, order);
    }

    #[test]
    fn test_equality_includes_owner() {
        let order = roses();
        let mut attached = order.clone();
        attached.attach_client(&client("Alice")).unwrap();
        assert_ne!(order, attached);
    }

    #[test]
    fn test_display_omits_client() {
        let mut order = roses();
        let alice = client("Alice");
        order.attach_client(&alice).unwrap();
        let shown = order.to_string();
        assert!(shown.contains("Remark: 1xRoses"));
        assert!(shown.contains("Price: 40.00"));
        assert!(!shown.contains(&alice.id().to_string()));
    }
}
