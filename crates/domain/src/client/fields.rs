//! Contact details of a client.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("valid name regex"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[[:alnum:]]+(?:[+_.\-][[:alnum:]]+)*@[[:alnum:]](?:[[:alnum:]\-]*[[:alnum:]])?(?:\.[[:alnum:]](?:[[:alnum:]\-]*[[:alnum:]])?)*\.[[:alnum:]]{2,}$",
    )
    .expect("valid email regex")
});

static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S.*$").expect("valid address regex"));

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:alnum:]]+$").expect("valid tag regex"));

macro_rules! validated_string {
    ($(#[$meta:meta])* $name:ident, $field:literal, $pattern:ident, $message:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const MESSAGE_CONSTRAINTS: &'static str = $message;

            pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
                let raw = raw.into();
                if $pattern.is_match(&raw) {
                    Ok(Self(raw))
                } else {
                    Err(ValidationError::new($field, Self::MESSAGE_CONSTRAINTS))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::parse(raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

validated_string!(
    /// Client name; also the client's identity within the book.
    Name,
    "name",
    NAME_PATTERN,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank"
);

validated_string!(
    Phone,
    "phone",
    PHONE_PATTERN,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long"
);

validated_string!(
    Email,
    "email",
    EMAIL_PATTERN,
    "Emails should be of the format local-part@domain, where the local-part is alphanumeric \
     with optional + _ . - separators and the domain ends with a label of at least 2 characters"
);

validated_string!(
    Address,
    "address",
    ADDRESS_PATTERN,
    "Addresses can take any values, and it should not be blank"
);

validated_string!(
    /// Free-form label attached to a client.
    Tag,
    "tag",
    TAG_PATTERN,
    "Tags names should be alphanumeric"
);
