use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::validate_password_strength;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, TokenType, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct ConfirmPasswordResetInput {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfirmPasswordResetError {
    /// Covers bad signature, expiry, consumed or superseded marker,
    /// unknown user. One answer for all of them.
    #[error("Password reset token is invalid or has expired")]
    InvalidToken,

    #[error("Password must be at least 8 characters and mix letters with digits")]
    WeakPassword,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IConfirmPasswordResetUseCase: Send + Sync {
    async fn execute(&self, input: ConfirmPasswordResetInput)
        -> Result<(), ConfirmPasswordResetError>;
}

/// Completes a reset started by `RequestPasswordResetUseCase`. The account
/// comes from the token's `sub`; its `jti` must still match the marker on
/// that account. Storing the new hash clears the marker, which is what
/// makes each token single-use.
#[derive(Clone)]
pub struct ConfirmPasswordResetUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> ConfirmPasswordResetUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IConfirmPasswordResetUseCase for ConfirmPasswordResetUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: ConfirmPasswordResetInput,
    ) -> Result<(), ConfirmPasswordResetError> {
        validate_password_strength(&input.new_password)
            .map_err(|_| ConfirmPasswordResetError::WeakPassword)?;

        let claims = self
            .token_provider
            .validate(&input.token, TokenType::PasswordReset)
            .map_err(|_| ConfirmPasswordResetError::InvalidToken)?;

        let user_id = claims.sub;

        let credentials = self
            .query
            .credentials_by_id(user_id.into())
            .await
            .map_err(|e| ConfirmPasswordResetError::QueryError(e.to_string()))?
            .ok_or(ConfirmPasswordResetError::InvalidToken)?;

        // A consumed marker is None; a newer request overwrote it with a
        // different jti. Either way this token is dead.
        let marker = credentials
            .password_reset_jti
            .as_deref()
            .ok_or(ConfirmPasswordResetError::InvalidToken)?;

        if claims.jti.as_deref() != Some(marker) {
            return Err(ConfirmPasswordResetError::InvalidToken);
        }

        let new_hash = self
            .password_hasher
            .hash_password(&input.new_password)
            .await
            .map_err(|e| ConfirmPasswordResetError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(user_id.into(), new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ConfirmPasswordResetError::InvalidToken,
                other => ConfirmPasswordResetError::RepositoryError(other.to_string()),
            })
    }
}
