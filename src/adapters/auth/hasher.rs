//! Salted SHA-256 password hasher.
//!
//! Encoded form: `{salt}${hex digest}` where `digest = SHA-256(salt ||
//! password)` and the salt is a fresh random value per hash. Verification
//! recomputes the digest and compares in constant time.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::domain::account::PasswordHash;
use crate::ports::PasswordHasher;

/// Separator between salt and digest in the encoded form.
const SEPARATOR: char = '$';

/// Password hasher using per-account salts and SHA-256 digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaltedSha256Hasher;

impl SaltedSha256Hasher {
    /// Creates a hasher.
    pub fn new() -> Self {
        Self
    }

    fn digest_hex(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}

impl PasswordHasher for SaltedSha256Hasher {
    fn hash(&self, password: &SecretString) -> PasswordHash {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = Self::digest_hex(&salt, password.expose_secret());
        PasswordHash::from_encoded(format!("{salt}{SEPARATOR}{digest}"))
    }

    fn verify(&self, password: &SecretString, hash: &PasswordHash) -> bool {
        let Some((salt, stored_digest)) = hash.as_str().split_once(SEPARATOR) else {
            return false;
        };

        let computed = Self::digest_hex(salt, password.expose_secret());
        computed.as_bytes().ct_eq(stored_digest.as_bytes()).into()
    }
}
