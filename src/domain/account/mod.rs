//! Account module - registered storefront users.
//!
//! An account owns a staged cart and the orders it commits. The directory of
//! accounts is keyed by username; usernames are never reused.

mod aggregate;
mod errors;
mod password;

pub use aggregate::Account;
pub use errors::AccountError;
pub use password::PasswordHash;
