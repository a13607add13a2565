use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::ports::{
    incoming::use_cases::{DeleteEventError, DeleteEventUseCase},
    outgoing::{EventRepository, EventRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteEventService<R>
where
    R: EventRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteEventService<R>
where
    R: EventRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteEventUseCase for DeleteEventService<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, event_id: Uuid) -> Result<(), DeleteEventError> {
        self.repository
            .delete_event(event_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::EventNotFound => DeleteEventError::EventNotFound,
                other => DeleteEventError::DatabaseError(other.to_string()),
            })
    }
}
