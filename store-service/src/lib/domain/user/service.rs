use std::sync::Arc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Read-side operations over registered users.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `Storage` - store operation failed
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.value()))
    }

    /// Retrieve all registered users.
    ///
    /// # Errors
    /// * `Storage` - store operation failed
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}
