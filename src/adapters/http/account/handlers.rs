//! HTTP handlers for account endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use secrecy::SecretString;

use crate::application::handlers::account::{
    SignInCommand, SignInHandler, SignOutCommand, SignOutHandler, SignUpCommand, SignUpHandler,
};
use crate::domain::account::AccountError;
use crate::domain::foundation::SessionToken;

use super::dto::{SignInRequest, SignInResponse, SignOutResponse, SignUpRequest, SignUpResponse};
use crate::adapters::http::error::error_response;

/// Handler state for account endpoints.
#[derive(Clone)]
pub struct AccountHandlers {
    sign_up: Arc<SignUpHandler>,
    sign_in: Arc<SignInHandler>,
    sign_out: Arc<SignOutHandler>,
}

impl AccountHandlers {
    pub fn new(
        sign_up: Arc<SignUpHandler>,
        sign_in: Arc<SignInHandler>,
        sign_out: Arc<SignOutHandler>,
    ) -> Self {
        Self {
            sign_up,
            sign_in,
            sign_out,
        }
    }
}

/// POST /api/accounts/signup - Register an account
pub async fn sign_up(
    State(handlers): State<AccountHandlers>,
    Json(req): Json<SignUpRequest>,
) -> Response {
    let cmd = SignUpCommand {
        username: req.username,
        password: SecretString::new(req.password),
    };

    match handlers.sign_up.handle(cmd).await {
        Ok(result) => {
            let response = SignUpResponse {
                username: result.account.username().to_string(),
                message: "Sign Up successful! You can now sign in.".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_account_error(e),
    }
}

/// POST /api/accounts/signin - Sign in and receive a session token
pub async fn sign_in(
    State(handlers): State<AccountHandlers>,
    Json(req): Json<SignInRequest>,
) -> Response {
    let cmd = SignInCommand {
        username: req.username,
        password: SecretString::new(req.password),
    };

    match handlers.sign_in.handle(cmd).await {
        Ok(result) => {
            let response = SignInResponse::new(result.token.to_string(), &result.account);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_account_error(e),
    }
}

/// POST /api/accounts/signout - Revoke the presented session token
///
/// Idempotent: signing out without a valid token still succeeds, mirroring
/// a logout that simply forgets the stored identity.
pub async fn sign_out(State(handlers): State<AccountHandlers>, headers: HeaderMap) -> Response {
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .and_then(|raw| raw.parse::<SessionToken>().ok());

    if let Some(token) = token {
        if let Err(e) = handlers.sign_out.handle(SignOutCommand { token }).await {
            return handle_account_error(e);
        }
    }

    let response = SignOutResponse {
        message: "Signed out.".to_string(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

fn handle_account_error(error: AccountError) -> Response {
    error_response(error.code(), error.message())
}
