//! Password hasher port.
//!
//! Credentials are hashed before they reach the directory and verified
//! without ever reconstructing the raw password. Implementations must use a
//! per-account salt and compare digests in constant time.

use secrecy::SecretString;

use crate::domain::account::PasswordHash;

/// Port for credential hashing and verification.
pub trait PasswordHasher: Send + Sync {
    /// Hash a raw password with a fresh salt.
    fn hash(&self, password: &SecretString) -> PasswordHash;

    /// Verify a raw password against a stored hash.
    ///
    /// Must take the same time whether the digests match or not.
    fn verify(&self, password: &SecretString, hash: &PasswordHash) -> bool;
}
