//! Session Token Authentication (Bearer Token)
//!
//! Tokens are issued by the external auth service; this extractor only
//! resolves them to the user they belong to.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use quoter::{DomainError, UserIdentity};

use crate::error::ApiError;
use crate::AppState;

/// The authenticated caller of a request
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserIdentity);

/// Extract the token from an `Authorization: Bearer <token>` header value
fn bearer_token(header: Option<&str>) -> Option<&str> {
    let header = header?;
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match bearer_token(auth_header) {
            Some(token) => token,
            None => {
                tracing::warn!("Missing or malformed Authorization header");
                return Err(DomainError::unauthorized("Unauthorized").into());
            }
        };

        match state.session_repo.resolve(token).await? {
            Some(identity) => Ok(AuthUser(identity)),
            None => {
                tracing::warn!("Unknown or expired session token");
                Err(DomainError::unauthorized("Unauthorized").into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_is_extracted() {
        assert_eq!(bearer_token(Some("Bearer abc123")), Some("abc123"));
    }

    #[test]
    fn test_missing_header_is_rejected() {
        assert_eq!(bearer_token(None), None);
    }

    #[test]
    fn test_non_bearer_scheme_is_rejected() {
        assert_eq!(bearer_token(Some("Basic abc123")), None);
        assert_eq!(bearer_token(Some("bearer abc123")), None);
    }

    #[test]
    fn test_empty_token_is_rejected() {
        assert_eq!(bearer_token(Some("Bearer ")), None);
    }
}
