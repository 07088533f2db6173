use thiserror::Error;

/// Error type for token operations.
///
/// `Malformed` and `Expired` are deliberately distinct: callers route them
/// to different rejection statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,
}
