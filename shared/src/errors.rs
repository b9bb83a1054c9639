//! Error types shared across the FitLife application

use thiserror::Error;

/// Authentication error taxonomy
///
/// Distinguishes the 401 variants so the API can report "Invalid token"
/// and "Token expired" as separate messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("No token provided, authorization denied")]
    MissingToken,
}
