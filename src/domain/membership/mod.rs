//! Membership module - loyalty tiers and their shipping rates.

mod tier;

pub use tier::MembershipTier;
