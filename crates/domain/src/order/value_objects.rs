//! Value objects for the order domain.

use std::sync::LazyLock;

use chrono::{Local, NaiveDateTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Input and display format shared by order dates and deadlines.
pub const DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,12})(?:\.(\d{1,2}))?$").expect("valid price regex"));

static REMARK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S.*$").expect("valid remark regex"));

/// Parses `dd-MM-yyyy HH:mm`, accepting only instants after the Unix epoch.
fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let parsed = NaiveDateTime::parse_from_str(raw.trim(), DATE_TIME_FORMAT).ok()?;
    (parsed.and_utc().timestamp() > 0).then_some(parsed)
}

/// When the order was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderDate(NaiveDateTime);

impl OrderDate {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Order dates should be in the format dd-MM-yyyy HH:mm and be after 01-01-1970 00:00";

    /// Parses an order date from user input.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        parse_date_time(raw)
            .map(Self)
            .ok_or_else(|| ValidationError::new("order date", Self::MESSAGE_CONSTRAINTS))
    }

    /// Stamps the current local time, truncated to the minute.
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        Self(
            now.with_second(0)
                .and_then(|t| t.with_nanosecond(0))
                .unwrap_or(now),
        )
    }

    pub fn value(&self) -> NaiveDateTime {
        self.0
    }
}

impl std::fmt::Display for OrderDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

impl TryFrom<String> for OrderDate {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<OrderDate> for String {
    fn from(date: OrderDate) -> Self {
        date.to_string()
    }
}

/// When the order is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Deadline(NaiveDateTime);

impl Deadline {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Deadlines should be in the format dd-MM-yyyy HH:mm and be after 01-01-1970 00:00";

    /// Parses a deadline from user input.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        parse_date_time(raw)
            .map(Self)
            .ok_or_else(|| ValidationError::new("deadline", Self::MESSAGE_CONSTRAINTS))
    }

    pub fn value(&self) -> NaiveDateTime {
        self.0
    }
}

impl std::fmt::Display for Deadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

impl TryFrom<String> for Deadline {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Deadline> for String {
    fn from(deadline: Deadline) -> Self {
        deadline.to_string()
    }
}

/// Order price, stored in cents to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Prices should be non-negative numbers with at most two decimal places";

    /// Parses a price such as `40`, `40.5` or `40.50`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::new("price", Self::MESSAGE_CONSTRAINTS);

        let captures = PRICE_PATTERN.captures(raw.trim()).ok_or_else(invalid)?;
        let whole: u64 = captures[1].parse().map_err(|_| invalid())?;
        let fraction: u64 = match captures.get(2) {
            // "5" means fifty cents, "05" means five
            Some(m) if m.as_str().len() == 1 => m.as_str().parse::<u64>().map_err(|_| invalid())? * 10,
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .map(Self::from_cents)
            .ok_or_else(invalid)
    }

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl TryFrom<String> for Price {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

/// Free-text description of what was ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Remark(String);

impl Remark {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Remarks can take any values, and they should not be blank or start with whitespace";

    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if REMARK_PATTERN.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(ValidationError::new("remark", Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Remark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Remark {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<Remark> for String {
    fn from(remark: Remark) -> Self {
        remark.0
    }
}
