use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::use_cases::create_account::{
    CreateAccountError, CreateAccountInput, CreateAccountOutput, ICreateAccountUseCase,
};
use crate::email::application::ports::outgoing::AccountNotifier;

#[derive(Debug)]
pub struct RegistrationOutput {
    pub user_id: uuid::Uuid,
    pub username: String,
    pub email: String,
    pub message: String,
}

impl From<CreateAccountOutput> for RegistrationOutput {
    fn from(output: CreateAccountOutput) -> Self {
        Self {
            user_id: output.user_id,
            username: output.username,
            email: output.email,
            message:
                "Account created successfully. Please check your email to activate your account."
                    .to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error(transparent)]
    CreateAccountFailed(#[from] CreateAccountError),
}

/// Ties account creation to the activation email. The account write is the
/// transaction; the email is dispatched in the background and retried, so a
/// slow or flaky SMTP relay never blocks or fails the signup response.
#[derive(Clone)]
pub struct RegistrationOrchestrator {
    create_account: Arc<dyn ICreateAccountUseCase + Send + Sync>,
    notifier: Arc<dyn AccountNotifier + Send + Sync>,
}

impl RegistrationOrchestrator {
    pub fn new(
        create_account: Arc<dyn ICreateAccountUseCase + Send + Sync>,
        notifier: Arc<dyn AccountNotifier + Send + Sync>,
    ) -> Self {
        Self {
            create_account,
            notifier,
        }
    }

    pub async fn register(
        &self,
        input: CreateAccountInput,
    ) -> Result<RegistrationOutput, RegistrationError> {
        let created = self.create_account.execute(input).await?;

        let notifier = Arc::clone(&self.notifier);
        let user_id = created.user_id;
        let username = created.username.clone();
        let email = created.email.clone();
        let fingerprint = created.credential_fingerprint.clone();

        tokio::spawn(async move {
            let max_retries = 3;
            for attempt in 1..=max_retries {
                match notifier
                    .send_activation_email(user_id, &username, &email, &fingerprint)
                    .await
                {
                    Ok(_) => return,
                    Err(e) if attempt < max_retries => {
                        tracing::warn!(
                            "Activation email attempt {}/{} failed for user {}: {}. Retrying...",
                            attempt,
                            max_retries,
                            user_id,
                            e
                        );
                        tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            "All {} activation email attempts failed for user {}: {}",
                            max_retries,
                            user_id,
                            e
                        );
                    }
                }
            }
        });

        Ok(created.into())
    }
}
