use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteEventError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Deleting an event removes its attendance rows with it.
#[async_trait]
pub trait DeleteEventUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid) -> Result<(), DeleteEventError>;
}
