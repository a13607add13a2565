use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// Hashing runs on a blocking thread; both operations are async so request
/// handlers never stall the executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` is a clean mismatch; `Err` means the check itself failed.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
