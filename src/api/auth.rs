//! Bearer Token Authorization
//!
//! Create and delete require `Authorization: Bearer <AUTH_KEY>`. The check is
//! an extractor, so a rejected request never reaches the handler body.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use tracing::warn;

use super::handlers::AppState;
use crate::error::AppError;

const BEARER_PREFIX: &str = "bearer ";

/// Proof that the request carried the configured bearer secret.
#[derive(Debug, Clone, Copy)]
pub struct BearerAuth;

#[async_trait]
impl FromRequestParts<AppState> for BearerAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match authorize(&parts.headers, state.config.auth_key.as_deref()) {
            Ok(()) => Ok(BearerAuth),
            Err(err) => {
                warn!(method = %parts.method, path = %parts.uri.path(), "Rejected bearer token");
                Err(err)
            }
        }
    }
}

/// Checks the `Authorization` header against `secret`.
///
/// The scheme is matched case-insensitively and the token is trimmed before
/// an exact comparison. With no secret configured nothing is accepted.
pub fn authorize(headers: &HeaderMap, secret: Option<&str>) -> Result<(), AppError> {
    let secret = secret.ok_or(AppError::Unauthorized)?;
    let token = extract_bearer_token(headers).ok_or(AppError::Unauthorized)?;

    if token == secret {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

/// Extract the trimmed Bearer token from the Authorization header.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let scheme = value.get(..BEARER_PREFIX.len())?;
    if !scheme.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }
    value.get(BEARER_PREFIX.len()..).map(str::trim)
}
