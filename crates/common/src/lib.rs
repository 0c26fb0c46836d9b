//! Shared identifier types for the bookkeeper address book.

mod index;
mod types;

pub use index::Index;
pub use types::{ClientId, OrderId};
