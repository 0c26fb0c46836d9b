//! Persistence for the bookkeeper.
//!
//! The whole book is saved as one JSON document. Orders are stored nested
//! under their client and re-attached on load.

pub mod error;
pub mod file;
pub mod json;
pub mod memory;
pub mod store;

pub use error::{Result, StorageError};
pub use file::JsonFileStorage;
pub use json::JsonSerializableBookKeeper;
pub use memory::InMemoryBookKeeperStorage;
pub use store::BookKeeperStorage;
