use serde::Deserialize;
use serde::Serialize;

/// Payload carried inside a signed token.
///
/// Produced only by the token service at issuance; immutable once signed.
/// Expiry is the only invalidation mechanism - there is no revocation list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: i64,

    /// Subject email
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}
