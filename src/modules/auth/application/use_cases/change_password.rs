use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::validate_password_strength;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct ChangePasswordInput {
    pub user_id: Uuid,
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Current password is incorrect")]
    CurrentPasswordIncorrect,

    #[error("Password must be at least 8 characters and mix letters with digits")]
    WeakPassword,

    /// Token outlived the account row.
    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(&self, input: ChangePasswordInput) -> Result<(), ChangePasswordError>;
}

/// Re-authenticates with the current password before storing the new hash.
/// The repository clears any pending reset marker in the same update, so a
/// stale reset link cannot undo the change.
#[derive(Clone)]
pub struct ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IChangePasswordUseCase for ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: ChangePasswordInput) -> Result<(), ChangePasswordError> {
        validate_password_strength(&input.new_password)
            .map_err(|_| ChangePasswordError::WeakPassword)?;

        let credentials = self
            .query
            .credentials_by_id(input.user_id.into())
            .await
            .map_err(|e| ChangePasswordError::QueryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let is_valid = self
            .password_hasher
            .verify_password(&input.current_password, &credentials.password_hash)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        if !is_valid {
            return Err(ChangePasswordError::CurrentPasswordIncorrect);
        }

        let new_hash = self
            .password_hasher
            .hash_password(&input.new_password)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(input.user_id.into(), new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
                other => ChangePasswordError::RepositoryError(other.to_string()),
            })
    }
}
