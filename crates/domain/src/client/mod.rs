//! Clients and their contact details.

mod entity;
mod fields;

pub use entity::Client;
pub use fields::{Address, Email, Name, Phone, Tag};
