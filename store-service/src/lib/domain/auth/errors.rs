use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Error for password strength policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain a lowercase letter")]
    MissingLowercase,

    #[error("Password must contain an uppercase letter")]
    MissingUppercase,

    #[error("Password must contain a digit")]
    MissingDigit,
}

/// Top-level error for registration and login operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Email is already registered")]
    EmailAlreadyExists(String),

    /// Covers both unknown email and wrong password; the two paths must
    /// stay indistinguishable to callers.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Hashing(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(email) => AuthError::EmailAlreadyExists(email),
            other => AuthError::Storage(other.to_string()),
        }
    }
}
