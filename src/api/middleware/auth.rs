//! Bearer token authentication middleware.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Authenticated account extracted from the session token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub email: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Session authentication middleware.
///
/// Hands the bearer token to the authorization guard, then injects the
/// CurrentUser into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let email = state
        .guard
        .authorize(bearer_token(request.headers()))
        .inspect_err(|_| tracing::debug!(path = %request.uri().path(), "bearer token rejected"))?;

    request.extensions_mut().insert(CurrentUser { email });

    Ok(next.run(request).await)
}
