use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenDenylistError {
    #[error("Denylist backend error: {0}")]
    Backend(String),
}

/// Revoked refresh tokens. Entries expire with the token itself, so the
/// store never needs explicit cleanup.
#[async_trait]
pub trait TokenDenylist: Send + Sync {
    async fn revoke(
        &self,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenDenylistError>;

    async fn is_revoked(&self, token: &str) -> Result<bool, TokenDenylistError>;
}
