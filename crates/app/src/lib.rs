//! Application layer for the bookkeeper.
//!
//! Wires the domain model to storage: commands run through
//! [`LogicManager`], which saves the book after each successful command.

pub mod config;
pub mod error;
pub mod logic;
pub mod sample;

pub use config::Config;
pub use error::{LogicError, Result};
pub use logic::LogicManager;
pub use sample::{SampleDataError, sample_book_keeper};
