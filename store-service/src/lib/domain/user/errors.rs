use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Username contains invalid characters (only letters and digits allowed)")]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for user store and lookup operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("User with ID {0} does not exist")]
    NotFound(i64),

    /// The email carried here is for logging; the display message stays
    /// generic.
    #[error("Email is already registered")]
    EmailAlreadyExists(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
