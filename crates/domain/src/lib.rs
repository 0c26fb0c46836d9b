//! Domain layer for the bookkeeper address book.
//!
//! This crate provides:
//! - Validated value objects for clients and orders
//! - `Client` and `Order` entities with copy-on-write updates
//! - `BookKeeper`, the owning collection, with the order list derived from it
//! - The `Model` trait and `ModelManager` with filtered views
//! - Commands that apply one state transition each

pub mod book;
pub mod client;
pub mod command;
pub mod error;
pub mod model;
pub mod order;
pub mod predicate;

pub use book::{BookKeeper, UniqueClientList};
pub use client::{Address, Client, Email, Name, Phone, Tag};
pub use command::{
    AddClientCommand, AddOrderCommand, ClearCommand, Command, CommandError, CommandResult,
    DeleteClientCommand, DeleteOrderCommand, EditOrderCommand, EditOrderDescriptor,
    FilterOrdersCommand, FindCommand, ListCommand,
};
pub use common::{ClientId, Index, OrderId};
pub use error::{ModelError, ValidationError};
pub use model::{Model, ModelManager};
pub use order::{Deadline, Order, OrderDate, Price, Remark, Status};
pub use predicate::Predicate;
