//! Auth adapters - password hashing implementations.

mod hasher;

pub use hasher::SaltedSha256Hasher;
