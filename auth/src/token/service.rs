use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Default token lifetime in hours.
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// Issues and verifies signed, time-bounded identity tokens.
///
/// Uses HS256 (HMAC with SHA-256) over a process-wide secret.
///
/// # Security Notes
/// - The secret should be at least 256 bits (32 bytes) for HS256
/// - Store secrets in configuration or secure vaults, never in code
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a new token service with a secret key.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token asserting a subject's id and email.
    ///
    /// # Arguments
    /// * `subject_id` - Subject identifier, becomes the `sub` claim
    /// * `email` - Subject email address
    /// * `ttl` - Lifetime; `exp` is set to issuance time plus `ttl`
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject_id: i64, email: &str, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let header = Header::new(self.algorithm);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's structure, signature, and expiry.
    ///
    /// Structure and signature are checked first, so a tampered token is
    /// always `Malformed` even when its expiry has also passed.
    ///
    /// # Errors
    /// * `Malformed` - structurally invalid or signature mismatch
    /// * `Expired` - current time has reached `exp`
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // exp is validated below; the library check is exclusive and
        // applies leeway.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::Malformed(e.to_string()))?;

        let claims = token_data.claims;
        if Utc::now().timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
