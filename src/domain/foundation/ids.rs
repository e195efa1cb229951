//! Strongly-typed identifier value objects.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Maximum length for usernames.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Unique, validated account name. Doubles as the account identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a username from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the trimmed value is empty
    /// - `InvalidFormat` if the value exceeds [`MAX_USERNAME_LENGTH`] or
    ///   contains characters outside `[A-Za-z0-9._-]`
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if trimmed.len() > MAX_USERNAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "username",
                format!("must be {} characters or less", MAX_USERNAME_LENGTH),
            ));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(ValidationError::invalid_format(
                "username",
                "may only contain letters, digits, '.', '_' and '-'",
            ));
        }
        Ok(Self(trimmed))
    }

    /// Returns the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric product identifier from the catalog.
///
/// Upstream data sometimes carries the id as a JSON string; deserialization
/// normalizes both forms to the numeric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Creates a product id from a raw numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the inner numeric value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ProductIdVisitor;

        impl<'de> serde::de::Visitor<'de> for ProductIdVisitor {
            type Value = ProductId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-negative integer or a numeric string")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<ProductId, E> {
                Ok(ProductId(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<ProductId, E> {
                u64::try_from(v)
                    .map(ProductId)
                    .map_err(|_| E::custom("product id cannot be negative"))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<ProductId, E> {
                v.trim()
                    .parse::<u64>()
                    .map(ProductId)
                    .map_err(|_| E::custom(format!("invalid product id: {v:?}")))
            }
        }

        deserializer.deserialize_any(ProductIdVisitor)
    }
}

/// Sequential order identifier allocated from the ledger counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Creates an order id from a raw counter value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the id following this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the inner numeric value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque session token issued at sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(Uuid);

impl SessionToken {
    /// Creates a new random session token.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
