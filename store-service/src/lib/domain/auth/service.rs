use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenService;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthSession;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Registration and login orchestration.
///
/// Coordinates the identity store, the password hasher, and the token
/// service. Holds no per-request state; the hasher and token service are
/// configured once at startup.
pub struct AuthService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
    token_ttl: Duration,
    /// Verified against when a login email is unknown, so the miss path
    /// costs a hash comparison like the mismatch path.
    decoy_hash: Option<String>,
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    pub fn new(
        repository: Arc<R>,
        hasher: PasswordHasher,
        tokens: Arc<TokenService>,
        token_ttl: Duration,
    ) -> Self {
        let decoy_hash = hasher.hash("decoy-login-password").ok();
        Self {
            repository,
            hasher,
            tokens,
            token_ttl,
            decoy_hash,
        }
    }

    /// Register a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - email is already registered
    /// * `Hashing` - password hashing failed
    /// * `Storage` - store operation failed
    pub async fn register(&self, command: RegisterCommand) -> Result<User, AuthError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.hasher.hash(command.password.as_str())?;

        // The store re-checks uniqueness under its write lock; this call
        // still fails cleanly if a concurrent registration won the race.
        let user = self
            .repository
            .create(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown email and wrong password return the same error value.
    ///
    /// # Errors
    /// * `InvalidCredentials` - email not registered or password mismatch
    /// * `Token` - token issuance failed
    /// * `Storage` - store operation failed
    pub async fn login(&self, command: LoginCommand) -> Result<AuthSession, AuthError> {
        let user = match self
            .repository
            .find_by_email(command.email.as_str())
            .await?
        {
            Some(user) => user,
            None => {
                if let Some(hash) = &self.decoy_hash {
                    let _ = self.hasher.verify(&command.password, hash);
                }
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self.hasher.verify(&command.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.id.value(), user.email.as_str(), self.token_ttl)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthSession { token, user })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::auth::models::Password;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;

    const TEST_SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
        }
    }

    fn service_with(repository: MockTestUserRepository) -> AuthService<MockTestUserRepository> {
        AuthService::new(
            Arc::new(repository),
            PasswordHasher::default(),
            Arc::new(TokenService::new(TEST_SECRET)),
            Duration::hours(24),
        )
    }

    fn register_command() -> RegisterCommand {
        RegisterCommand {
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password: Password::new("Passw0rd".to_string()).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .times(1)
            .returning(|_| Ok(None));

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.email.as_str() == "alice@example.com"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: UserId::new(1),
                    username: user.username,
                    email: user.email,
                    password_hash: user.password_hash,
                    created_at: Utc::now(),
                })
            });

        let service = service_with(repository);

        let user = service.register(register_command()).await.unwrap();
        assert_eq!(user.id.value(), 1);
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_find_by_email().times(1).returning(|_| {
            Ok(Some(User {
                id: UserId::new(1),
                username: Username::new("taken".to_string()).unwrap(),
                email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
                password_hash: "$argon2id$test_hash".to_string(),
                created_at: Utc::now(),
            }))
        });
        repository.expect_create().times(0);

        let service = service_with(repository);

        let result = service.register(register_command()).await;
        assert!(matches!(result, Err(AuthError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_lost_create_race() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = service_with(repository);

        let result = service.register(register_command()).await;
        assert!(matches!(result, Err(AuthError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_success_issues_verifiable_token() {
        let hasher = PasswordHasher::default();
        let stored_hash = hasher.hash("Passw0rd").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| {
                Ok(Some(User {
                    id: UserId::new(7),
                    username: Username::new("alice".to_string()).unwrap(),
                    email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
                    password_hash: stored_hash.clone(),
                    created_at: Utc::now(),
                }))
            });

        let tokens = Arc::new(TokenService::new(TEST_SECRET));
        let service = AuthService::new(
            Arc::new(repository),
            hasher,
            Arc::clone(&tokens),
            Duration::hours(24),
        );

        let session = service
            .login(LoginCommand {
                email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
                password: "Passw0rd".to_string(),
            })
            .await
            .unwrap();

        let claims = tokens.verify(&session.token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let hasher = PasswordHasher::default();
        let stored_hash = hasher.hash("Passw0rd").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| {
                Ok(Some(User {
                    id: UserId::new(7),
                    username: Username::new("alice".to_string()).unwrap(),
                    email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
                    password_hash: stored_hash.clone(),
                    created_at: Utc::now(),
                }))
            });

        let service = AuthService::new(
            Arc::new(repository),
            hasher,
            Arc::new(TokenService::new(TEST_SECRET)),
            Duration::hours(24),
        );

        let result = service
            .login(LoginCommand {
                email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
                password: "WrongPassw0rd".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_same_error() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service_with(repository);

        let result = service
            .login(LoginCommand {
                email: EmailAddress::new("ghost@example.com".to_string()).unwrap(),
                password: "whatever".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
