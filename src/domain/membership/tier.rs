//! Membership tier definitions.
//!
//! Represents the loyalty tier levels available to storefront accounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account membership tier.
///
/// Determines the per-unit shipping rate applied at checkout. Rates never
/// increase from one tier to the next: bronze pays full shipping, platinum
/// ships free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    /// Entry tier - every new account starts here.
    #[default]
    Bronze,

    /// Reduced shipping.
    Silver,

    /// Half-rate shipping.
    Gold,

    /// Free shipping.
    Platinum,
}

impl MembershipTier {
    /// Returns the shipping rate charged per unit of quantity.
    pub fn shipping_rate(&self) -> Decimal {
        match self {
            MembershipTier::Bronze => Decimal::new(100, 2),
            MembershipTier::Silver => Decimal::new(75, 2),
            MembershipTier::Gold => Decimal::new(50, 2),
            MembershipTier::Platinum => Decimal::ZERO,
        }
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipTier::Bronze => "Bronze",
            MembershipTier::Silver => "Silver",
            MembershipTier::Gold => "Gold",
            MembershipTier::Platinum => "Platinum",
        }
    }

    /// Returns the numeric rank of this tier for comparison.
    ///
    /// Higher rank = better shipping terms.
    pub fn rank(&self) -> u8 {
        match self {
            MembershipTier::Bronze => 0,
            MembershipTier::Silver => 1,
            MembershipTier::Gold => 2,
            MembershipTier::Platinum => 3,
        }
    }

    /// All tiers in ascending rank order.
    pub fn all() -> [MembershipTier; 4] {
        [
            MembershipTier::Bronze,
            MembershipTier::Silver,
            MembershipTier::Gold,
            MembershipTier::Platinum,
        ]
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
