//! User service for authentication and account management
//!
//! Password hashing and verification run on the blocking thread pool; the
//! JWT service is passed by reference so its pre-computed keys are reused.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use fitlife_shared::errors::AuthError;
use fitlife_shared::types::AuthTokens;
use fitlife_shared::validation::{validate_email, validate_password};
use sqlx::PgPool;
use uuid::Uuid;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        validate_email(email).map_err(ApiError::Validation)?;
        validate_password(password).map_err(ApiError::Validation)?;

        if UserRepository::email_exists(pool, email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, email, &password_hash)
            .await
            .map_err(ApiError::Internal)?;

        Self::issue_tokens(jwt_service, user.id)
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash.clone())
                .await
                .map_err(ApiError::Internal)?;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        Self::issue_tokens(jwt_service, user.id)
    }

    /// Exchange a refresh token for a new token pair
    pub async fn refresh_token(
        pool: &PgPool,
        jwt_service: &JwtService,
        refresh_token: &str,
    ) -> Result<AuthTokens, ApiError> {
        let claims = jwt_service.validate_refresh_token(refresh_token)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        // The account may have been removed since the token was issued
        let _user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        Self::issue_tokens(jwt_service, user_id)
    }

    fn issue_tokens(jwt_service: &JwtService, user_id: Uuid) -> Result<AuthTokens, ApiError> {
        let access_token = jwt_service
            .generate_access_token(user_id)
            .map_err(ApiError::Internal)?;
        let refresh_token = jwt_service
            .generate_refresh_token(user_id)
            .map_err(ApiError::Internal)?;

        Ok(AuthTokens {
            success: true,
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.access_token_expiry_secs(),
        })
    }
}
