use async_trait::async_trait;
use uuid::Uuid;

use super::create_event_use_case::EventCommand;
use crate::event::application::ports::outgoing::EventDetailView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateEventError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Full-replace update of a single event.
#[async_trait]
pub trait UpdateEventUseCase: Send + Sync {
    async fn execute(
        &self,
        event_id: Uuid,
        command: EventCommand,
    ) -> Result<EventDetailView, UpdateEventError>;
}
