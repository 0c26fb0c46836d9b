//! Order status.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Where an order is in its lifecycle.
///
/// ```text
/// Pending ──┬──► Completed
///           └──► Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Order is open and still has to be delivered.
    #[default]
    Pending,

    /// Order has been delivered (terminal state).
    Completed,

    /// Order was called off (terminal state).
    Cancelled,
}

impl Status {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Status should be one of: PENDING, COMPLETED, CANCELLED";

    /// Returns true if no further status change is expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed | Status::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::Completed => "COMPLETED",
            Status::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Status::Pending),
            "COMPLETED" => Ok(Status::Completed),
            "CANCELLED" => Ok(Status::Cancelled),
            _ => Err(ValidationError::new("status", Self::MESSAGE_CONSTRAINTS)),
        }
    }
}
