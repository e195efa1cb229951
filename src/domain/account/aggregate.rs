//! Account aggregate entity.
//!
//! Accounts are created at sign-up and never deleted. The username is the
//! identity; it is unique across the directory.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, Username};
use crate::domain::membership::MembershipTier;

use super::PasswordHash;

/// Registered storefront account.
///
/// # Invariants
///
/// - `username` is unique across the directory
/// - `points` only ever increases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account name.
    username: Username,

    /// Salted password digest. Never the raw password.
    password_hash: PasswordHash,

    /// Loyalty tier determining the shipping rate.
    membership: MembershipTier,

    /// Accumulated loyalty points.
    points: u64,

    /// When the account was registered.
    created_at: Timestamp,
}

impl Account {
    /// Registers a new account at the entry tier with zero points.
    pub fn register(username: Username, password_hash: PasswordHash) -> Self {
        Self {
            username,
            password_hash,
            membership: MembershipTier::Bronze,
            points: 0,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes an account from persistence (no validation).
    pub fn reconstitute(
        username: Username,
        password_hash: PasswordHash,
        membership: MembershipTier,
        points: u64,
        created_at: Timestamp,
    ) -> Self {
        Self {
            username,
            password_hash,
            membership,
            points,
            created_at,
        }
    }

    /// Returns the account's username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the stored password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the membership tier.
    pub fn membership(&self) -> MembershipTier {
        self.membership
    }

    /// Returns the accumulated loyalty points.
    pub fn points(&self) -> u64 {
        self.points
    }

    /// Returns when the account was registered.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Credits loyalty points earned by a committed order.
    pub fn credit_points(&mut self, earned: u64) {
        self.points += earned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account() -> Account {
        Account::register(
            Username::new("alice").unwrap(),
            PasswordHash::from_encoded("salt$digest"),
        )
    }

    #[test]
    fn new_account_starts_at_bronze_with_zero_points() {
        let account = test_account();
        assert_eq!(account.membership(), MembershipTier::Bronze);
        assert_eq!(account.points(), 0);
    }

    #[test]
    fn credit_points_accumulates() {
        let mut account = test_account();
        account.credit_points(1);
        account.credit_points(3);
        assert_eq!(account.points(), 4);
    }

    #[test]
    fn crediting_zero_points_is_a_no_op() {
        let mut account = test_account();
        account.credit_points(0);
        assert_eq!(account.points(), 0);
    }

    #[test]
    fn account_roundtrips_through_json() {
        let account = test_account();
        let json = serde_json::to_string(&account).unwrap();
        let loaded: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, account);
    }

    #[test]
    fn reconstitute_preserves_fields() {
        let account = Account::reconstitute(
            Username::new("bob").unwrap(),
            PasswordHash::from_encoded("s$d"),
            MembershipTier::Gold,
            42,
            Timestamp::now(),
        );
        assert_eq!(account.membership(), MembershipTier::Gold);
        assert_eq!(account.points(), 42);
    }
}
