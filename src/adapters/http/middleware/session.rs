//! Session middleware and extractors for axum.
//!
//! This module provides:
//! - `session_middleware` - Layer that resolves session tokens and injects
//!   the signed-in user into request extensions
//! - `RequireSession` - Extractor that requires a signed-in user
//!
//! # Architecture
//!
//! The middleware uses the `SessionStore` port, keeping it backend-agnostic.
//! Pages that require identity reject unauthenticated requests with 401 -
//! the API rendition of the storefront's redirect to the sign-in page.
//!
//! ```text
//! Request → session_middleware → injects SignedInUser into extensions
//!                                      ↓
//!                              Handler → RequireSession extractor reads it
//! ```
//!
//! # Token Transport
//!
//! The token issued at sign-in travels in the `Authorization` header:
//! ```text
//! Authorization: Bearer <token>
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{SessionToken, Username};
use crate::ports::SessionStore;

/// Session middleware state - wraps the session store.
pub type SessionLayerState = Arc<dyn SessionStore>;

/// Signed-in user carried in request extensions.
#[derive(Debug, Clone)]
pub struct SignedInUser(pub Username);

/// Session middleware that resolves Bearer tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Resolves it through the `SessionStore` port
/// 3. On success, injects `SignedInUser` into request extensions
/// 4. On missing token, continues without injecting (handlers enforce via
///    `RequireSession`)
/// 5. On an unknown or malformed token, returns 401 Unauthorized
pub async fn session_middleware(
    State(sessions): State<SessionLayerState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(raw) => {
            let Ok(token) = raw.parse::<SessionToken>() else {
                return unauthorized("Invalid session token");
            };

            match sessions.resolve(&token).await {
                Ok(Some(username)) => {
                    request.extensions_mut().insert(SignedInUser(username));
                    next.run(request).await
                }
                Ok(None) => unauthorized("Session expired or signed out"),
                Err(e) => {
                    tracing::error!(error = %e, "session store unavailable");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        Json(serde_json::json!({
                            "error": "Session store unavailable",
                            "code": "SESSION_STORE_UNAVAILABLE"
                        })),
                    )
                        .into_response()
                }
            }
        }
        None => {
            // No token provided - continue without identity.
            // Handlers use RequireSession to enforce sign-in.
            next.run(request).await
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "error": message,
            "code": "UNAUTHENTICATED"
        })),
    )
        .into_response()
}

/// Extractor that requires a signed-in user.
///
/// Use this extractor in handlers that require identity. If no user is in
/// the request extensions (i.e., the middleware didn't resolve a token),
/// returns 401 Unauthorized.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireSession(username): RequireSession) -> impl IntoResponse {
///     format!("Hello, {}!", username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireSession(pub Username);

impl<S> axum::extract::FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<SignedInUser>()
                .cloned()
                .map(|SignedInUser(username)| RequireSession(username))
                .ok_or(SessionRejection::Unauthenticated)
        })
    }
}

/// Rejection type for missing sessions.
#[derive(Debug, Clone)]
pub enum SessionRejection {
    /// No signed-in user on the request.
    Unauthenticated,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SessionRejection::Unauthenticated => (StatusCode::UNAUTHORIZED, "Sign in required"),
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}
