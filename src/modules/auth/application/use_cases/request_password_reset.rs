use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::email::application::ports::outgoing::AccountNotifier;

#[derive(Debug, Clone)]
pub struct RequestPasswordResetInput {
    pub email: String,
}

/// Failures here are infrastructure problems only. "No such email" is not
/// an error; the endpoint must answer the same way either way.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRequestPasswordResetUseCase: Send + Sync {
    async fn execute(&self, input: RequestPasswordResetInput)
        -> Result<(), RequestPasswordResetError>;
}

/// Mints a fresh reset marker, stores it on the account and mails the link
/// in the background. Each request overwrites the previous marker, so only
/// the newest link works.
#[derive(Clone)]
pub struct RequestPasswordResetUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    notifier: Arc<dyn AccountNotifier + Send + Sync>,
}

impl<Q, R> RequestPasswordResetUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        notifier: Arc<dyn AccountNotifier + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IRequestPasswordResetUseCase for RequestPasswordResetUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RequestPasswordResetInput,
    ) -> Result<(), RequestPasswordResetError> {
        let email = input.email.trim().to_lowercase();

        let credentials = match self
            .query
            .credentials_by_email(&email)
            .await
            .map_err(|e| RequestPasswordResetError::QueryError(e.to_string()))?
        {
            Some(c) => c,
            None => return Ok(()),
        };

        // Inactive accounts must finish activation first; mailing them a
        // reset link would just confuse the flow.
        if !credentials.is_active {
            return Ok(());
        }

        let jti = Uuid::new_v4().simple().to_string();

        self.repository
            .set_password_reset_marker(credentials.id.into(), jti.clone())
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?;

        let notifier = Arc::clone(&self.notifier);
        let user_id = credentials.id;
        let username = credentials.username.clone();
        let recipient = credentials.email.clone();

        tokio::spawn(async move {
            let max_retries = 3;
            for attempt in 1..=max_retries {
                match notifier
                    .send_password_reset_email(user_id, &username, &recipient, &jti)
                    .await
                {
                    Ok(_) => return,
                    Err(e) if attempt < max_retries => {
                        tracing::warn!(
                            "Password reset email attempt {}/{} failed for user {}: {}. Retrying...",
                            attempt,
                            max_retries,
                            user_id,
                            e
                        );
                        tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            "All {} password reset email attempts failed for user {}: {}",
                            max_retries,
                            user_id,
                            e
                        );
                    }
                }
            }
        });

        Ok(())
    }
}
