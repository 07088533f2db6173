//! Authentication primitives library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id, tunable work factor)
//! - Signed token issuance and verification
//!
//! Services keep their own registration/login orchestration and adapt these
//! implementations. Nothing here knows about HTTP or storage.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::default();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let token = tokens
//!     .issue(42, "alice@example.com", Duration::hours(24))
//!     .unwrap();
//! let claims = tokens.verify(&token).unwrap();
//! assert_eq!(claims.sub, 42);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::HashingParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
pub use token::DEFAULT_TTL_HOURS;
