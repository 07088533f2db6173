use crate::domain::auth::errors::PasswordPolicyError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Plaintext password accepted for registration.
///
/// Construction enforces the strength policy: at least 8 characters with a
/// lowercase letter, an uppercase letter, and a digit.
#[derive(Debug, Clone)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;

    /// Create a policy-checked password.
    ///
    /// # Errors
    /// * `TooShort` - fewer than 8 characters
    /// * `MissingLowercase` / `MissingUppercase` / `MissingDigit` - a
    ///   required character class is absent
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(PasswordPolicyError::MissingLowercase);
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        Ok(Self(password))
    }

    /// Get password as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new user with validated fields.
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
}

/// Command to log an existing user in.
///
/// The password here is only checked for presence; strength policy applies
/// at registration.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

/// Result of a successful login: a bearer token and the identity it names.
#[derive(Debug)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_policy_accepts_compliant() {
        assert!(Password::new("Passw0rd".to_string()).is_ok());
        assert!(Password::new("aB3aB3aB3".to_string()).is_ok());
    }

    #[test]
    fn test_password_policy_rejections() {
        assert!(matches!(
            Password::new("Ab1".to_string()),
            Err(PasswordPolicyError::TooShort { .. })
        ));
        assert!(matches!(
            Password::new("PASSW0RD".to_string()),
            Err(PasswordPolicyError::MissingLowercase)
        ));
        assert!(matches!(
            Password::new("passw0rd".to_string()),
            Err(PasswordPolicyError::MissingUppercase)
        ));
        assert!(matches!(
            Password::new("Password".to_string()),
            Err(PasswordPolicyError::MissingDigit)
        ));
    }
}
