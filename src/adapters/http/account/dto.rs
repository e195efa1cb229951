//! HTTP DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::account::Account;
use crate::domain::membership::MembershipTier;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to register an account.
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
}

/// Request to sign in.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response after successful registration.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub username: String,
    pub message: String,
}

/// Response after successful sign-in.
#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub token: String,
    pub username: String,
    pub membership: MembershipTier,
    pub message: String,
}

/// Response after sign-out.
#[derive(Debug, Clone, Serialize)]
pub struct SignOutResponse {
    pub message: String,
}

impl SignInResponse {
    pub fn new(token: String, account: &Account) -> Self {
        Self {
            token,
            username: account.username().to_string(),
            membership: account.membership(),
            message: format!("Welcome back, {}!", account.username()),
        }
    }
}
