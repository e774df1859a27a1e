//! Authorization guard - turns a presented bearer token into a subject.

use std::sync::Arc;

use crate::errors::{AppError, AppResult};

use super::TokenCodec;

/// Validates already-extracted bearer tokens.
///
/// Every rejection reason (absent, malformed, tampered, expired) becomes
/// the same `AppError::Unauthorized`.
#[derive(Clone)]
pub struct AuthorizationGuard {
    tokens: Arc<TokenCodec>,
}

impl AuthorizationGuard {
    pub fn new(tokens: Arc<TokenCodec>) -> Self {
        Self { tokens }
    }

    /// Return the token's subject, or `Unauthorized`.
    pub fn authorize(&self, token: Option<&str>) -> AppResult<String> {
        let token = token.ok_or(AppError::Unauthorized)?;
        let claims = self.tokens.verify(token)?;
        Ok(claims.sub)
    }
}
