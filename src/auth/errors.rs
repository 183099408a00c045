//! Authentication error types.

use thiserror::Error;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Role value outside the permitted set
    #[error("Invalid role: {0}")]
    InvalidRole(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
