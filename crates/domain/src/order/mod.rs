//! Orders and the value objects they are made of.

mod entity;
mod status;
mod value_objects;

pub use entity::Order;
pub use status::Status;
pub use value_objects::{DATE_TIME_FORMAT, Deadline, OrderDate, Price, Remark};
