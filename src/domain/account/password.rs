//! Stored password hash value object.

use serde::{Deserialize, Serialize};

/// Opaque encoded password hash.
///
/// The encoding (salt, digest, separators) is owned by the hasher adapter;
/// the domain only ever stores and hands back the encoded form. Raw
/// passwords never appear in an [`Account`](super::Account).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps an encoded hash produced by a hasher.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Returns the encoded form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
