//! Authentication extractor
//!
//! Validates the `Authorization: Bearer` header with the pre-computed JWT
//! keys in AppState and exposes the caller's user id to handlers. Every
//! service call is scoped by this id, never by client-supplied
//! identifiers.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use fitlife_shared::errors::AuthError;
use uuid::Uuid;

/// Authenticated user extracted from a JWT access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        // Distinguishes expired from malformed tokens (distinct 401 bodies)
        let claims = app_state.jwt().validate_access_token(token)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_user_debug() {
        let user = AuthUser {
            user_id: Uuid::new_v4(),
        };
        let debug_str = format!("{:?}", user);
        assert!(debug_str.contains("AuthUser"));
    }
}
