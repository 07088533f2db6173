use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// In-memory user store.
///
/// Stands in for an external identity store behind the same contract. The
/// write lock is held across the uniqueness check and the insert, so two
/// concurrent registrations for one email cannot both succeed.
pub struct InMemoryUserStore {
    inner: RwLock<UserTable>,
}

struct UserTable {
    users: Vec<User>,
    next_id: i64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(UserTable {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut table = self.inner.write().await;

        if table
            .users
            .iter()
            .any(|existing| existing.email.as_str() == user.email.as_str())
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        let id = table.next_id;
        table.next_id += 1;

        let user = User {
            id: UserId::new(id),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        table.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        let table = self.inner.read().await;
        Ok(table.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let table = self.inner.read().await;
        Ok(table
            .users
            .iter()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let table = self.inner.read().await;
        Ok(table.users.clone())
    }
}
