//! JSON shape of the data file.
//!
//! Field values go through the domain's validating deserializers, so a bad
//! value is rejected with the same constraint message the user would see.
//! Orders are nested under their client and carry no client field; the
//! back-reference is rebuilt on load.

use std::collections::HashSet;

use common::{ClientId, OrderId};
use domain::{
    Address, BookKeeper, Client, Deadline, Email, Name, Order, OrderDate, Phone, Price, Remark,
    Status, Tag,
};
use serde::{Deserialize, Serialize};

use crate::{Result, StorageError};

pub(crate) const MESSAGE_DUPLICATE_CLIENT: &str = "Clients list contains duplicate client(s).";
pub(crate) const MESSAGE_DUPLICATE_CLIENT_ID: &str = "Clients list contains a repeated client id.";
pub(crate) const MESSAGE_DUPLICATE_ORDER: &str = "Orders list contains a repeated order id.";

/// Top-level document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonSerializableBookKeeper {
    #[serde(default)]
    clients: Vec<JsonAdaptedClient>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonAdaptedClient {
    id: ClientId,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    orders: Vec<JsonAdaptedOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonAdaptedOrder {
    order_id: OrderId,
    order_date: OrderDate,
    deadline: Deadline,
    price: Price,
    remark: Remark,
    #[serde(default)]
    status: Status,
}

impl JsonSerializableBookKeeper {
    pub fn from_model(book: &BookKeeper) -> Self {
        Self {
            clients: book.clients().iter().map(JsonAdaptedClient::from).collect(),
        }
    }

    /// Rebuilds the book, re-attaching every order to its client.
    pub fn into_model(self) -> Result<BookKeeper> {
        let mut book = BookKeeper::new();
        let mut client_ids = HashSet::new();
        let mut order_ids = HashSet::new();

        for adapted in self.clients {
            if !client_ids.insert(adapted.id) {
                return Err(illegal(MESSAGE_DUPLICATE_CLIENT_ID));
            }

            let client = Client::with_id(
                adapted.id,
                adapted.name,
                adapted.phone,
                adapted.email,
                adapted.address,
                adapted.tags.into_iter().collect(),
            );
            let client = adapted
                .orders
                .into_iter()
                .try_fold(client, |client, order| {
                    if !order_ids.insert(order.order_id) {
                        return Err(illegal(MESSAGE_DUPLICATE_ORDER));
                    }
                    client
                        .add_order(order.into())
                        .map_err(|_| illegal(MESSAGE_DUPLICATE_ORDER))
                })?;

            book.add_client(client)
                .map_err(|_| illegal(MESSAGE_DUPLICATE_CLIENT))?;
        }

        Ok(book)
    }
}

impl From<&Client> for JsonAdaptedClient {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id(),
            name: client.name().clone(),
            phone: client.phone().clone(),
            email: client.email().clone(),
            address: client.address().clone(),
            tags: client.tags().iter().cloned().collect(),
            orders: client.orders().iter().map(JsonAdaptedOrder::from).collect(),
        }
    }
}

impl From<&Order> for JsonAdaptedOrder {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id(),
            order_date: order.order_date(),
            deadline: order.deadline(),
            price: order.price(),
            remark: order.remark().clone(),
            status: order.status(),
        }
    }
}

impl From<JsonAdaptedOrder> for Order {
    fn from(order: JsonAdaptedOrder) -> Self {
        Order::new(
            order.order_id,
            order.order_date,
            order.deadline,
            order.price,
            order.remark,
            order.status,
        )
    }
}

fn illegal(message: &str) -> StorageError {
    StorageError::IllegalValue(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(name: &str) -> Client {
        Client::new(
            Name::parse(name).unwrap(),
            Phone::parse("94351253").unwrap(),
            Email::parse("someone@example.com").unwrap(),
            Address::parse("123, Jurong West Ave 6").unwrap(),
            [Tag::parse("florist").unwrap()].into_iter().collect(),
        )
    }

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

    fn parse(json: &str) -> Result<BookKeeper> {
        serde_json::from_str::<JsonSerializableBookKeeper>(json)?.into_model()
    }

    #[test]
    fn test_round_trip_restores_back_reference() {
        let alice = client("Alice").add_order(roses()).unwrap();
        let book = BookKeeper::from_clients(vec![alice.clone(), client("Bob")]).unwrap();

        let json = serde_json::to_string(&JsonSerializableBookKeeper::from_model(&book)).unwrap();
        let restored = parse(&json).unwrap();

        assert_eq!(restored, book);
        let order = restored.orders().next().unwrap();
        assert_eq!(restored.client_of(order).unwrap().id(), alice.id());
    }

    #[test]
    fn test_order_fields_use_camel_case() {
        let book = BookKeeper::from_clients(vec![client("Alice").add_order(roses()).unwrap()])
            .unwrap();
        let value = serde_json::to_value(JsonSerializableBookKeeper::from_model(&book)).unwrap();
        let order = &value["clients"][0]["orders"][0];

        assert_eq!(order["deadline"], "23-07-2024 00:00");
        assert_eq!(order["orderDate"], "01-07-2024 09:30");
        assert_eq!(order["price"], "40.00");
        assert_eq!(order["status"], "PENDING");
        assert!(order.get("client").is_none());
    }

    #[test]
    fn test_invalid_field_reports_constraint() {
        let json = format!(
            r#"{{"clients":[{{"id":"{}","name":"Alice","phone":"12","email":"a@example.com","address":"x"}}]}}"#,
            ClientId::new()
        );
        let err = parse(&json).unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
        assert!(err.to_string().contains(Phone::MESSAGE_CONSTRAINTS));
    }

    #[test]
    fn test_duplicate_clients_rejected() {
        let book = BookKeeper::from_clients(vec![client("Alice")]).unwrap();
        let mut data = JsonSerializableBookKeeper::from_model(&book);
        let mut twin = data.clients[0].clone();
        twin.id = ClientId::new();
        data.clients.push(twin);

        let err = data.into_model().unwrap_err();
        assert!(
            matches!(err, StorageError::IllegalValue(ref m) if m == MESSAGE_DUPLICATE_CLIENT)
        );
    }

    #[test]
    fn test_order_id_shared_between_clients_rejected() {
        let order = roses();
        let alice = client("Alice").add_order(order.clone()).unwrap();
        let bob = client("Bob").add_order(order).unwrap();
        let mut data = JsonSerializableBookKeeper::from_model(
            &BookKeeper::from_clients(vec![alice]).unwrap(),
        );
        data.clients.extend(
            JsonSerializableBookKeeper::from_model(&BookKeeper::from_clients(vec![bob]).unwrap())
                .clients,
        );

        let err = data.into_model().unwrap_err();
        assert!(matches!(err, StorageError::IllegalValue(ref m) if m == MESSAGE_DUPLICATE_ORDER));
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let json = format!(
            r#"{{"clients":[{{"id":"{}","name":"Alice","phone":"123","email":"a@example.com","address":"x",
               "orders":[{{"orderId":"{}","orderDate":"01-07-2024 09:30","deadline":"23-07-2024 00:00",
               "price":"40","remark":"Roses"}}]}}]}}"#,
            ClientId::new(),
            OrderId::new()
        );
        let book = parse(&json).unwrap();
        assert_eq!(book.orders().next().unwrap().status(), Status::Pending);
    }
}
