//! Data seeded on first run, when there is no data file yet.

use std::collections::BTreeSet;

use domain::{
    Address, BookKeeper, Client, Deadline, Email, ModelError, Name, Order, OrderDate, OrderId,
    Phone, Price, Remark, Status, Tag, ValidationError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleDataError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

struct SampleClient {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    tags: &'static [&'static str],
    orders: &'static [SampleOrder],
}

struct SampleOrder {
    order_date: &'static str,
    deadline: &'static str,
    price: &'static str,
    remark: &'static str,
    status: Status,
}

const SAMPLE_CLIENTS: &[SampleClient] = &[
    SampleClient {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        tags: &["friends"],
        orders: &[
            SampleOrder {
                order_date: "01-07-2024 09:30",
                deadline: "23-07-2024 00:00",
                price: "40",
                remark: "1xRoses",
                status: Status::Pending,
            },
            SampleOrder {
                order_date: "03-07-2024 14:00",
                deadline: "10-07-2024 12:00",
                price: "125.50",
                remark: "Wedding bouquet, white lilies",
                status: Status::Completed,
            },
        ],
    },
    SampleClient {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        tags: &["colleagues", "friends"],
        orders: &[SampleOrder {
            order_date: "05-07-2024 11:15",
            deadline: "06-07-2024 18:00",
            price: "18.90",
            remark: "Sunflower stems x6",
            status: Status::Cancelled,
        }],
    },
    SampleClient {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        tags: &["neighbours"],
        orders: &[],
    },
    SampleClient {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        tags: &["family"],
        orders: &[SampleOrder {
            order_date: "08-07-2024 08:45",
            deadline: "31-07-2024 09:00",
            price: "60",
            remark: "Anniversary arrangement",
            status: Status::Pending,
        }],
    },
];

/// Builds the sample book: a handful of clients, some with orders.
pub fn sample_book_keeper() -> Result<BookKeeper, SampleDataError> {
    let mut book = BookKeeper::new();
    for sample in SAMPLE_CLIENTS {
        let tags: BTreeSet<Tag> = sample
            .tags
            .iter()
            .map(|t| Tag::parse(*t))
            .collect::<Result<_, _>>()?;
        let mut client = Client::new(
            Name::parse(sample.name)?,
            Phone::parse(sample.phone)?,
            Email::parse(sample.email)?,
            Address::parse(sample.address)?,
            tags,
        );
        for order in sample.orders {
            client = client.add_order(Order::new(
                OrderId::new(),
                OrderDate::parse(order.order_date)?,
                Deadline::parse(order.deadline)?,
                Price::parse(order.price)?,
                Remark::parse(order.remark)?,
                order.status,
            ))?;
        }
        book.add_client(client)?;
    }
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_is_valid() {
        let book = sample_book_keeper().unwrap();
        assert_eq!(book.clients().len(), SAMPLE_CLIENTS.len());
        assert_eq!(book.order_count(), 4);
    }

    #[test]
    fn test_sample_orders_point_at_their_clients() {
        let book = sample_book_keeper().unwrap();
        for order in book.orders() {
            let owner = book.client_of(order).unwrap();
            assert!(owner.has_order(order.order_id()));
        }
    }
}
