use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EmailError {
    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Failed to send message: {0}")]
    Send(String),
}

/// Transport-level outbound email. Implementations own the SMTP details;
/// callers only supply addressing and an HTML body.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError>;
}
