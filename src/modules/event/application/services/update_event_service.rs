use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::ports::{
    incoming::use_cases::{EventCommand, UpdateEventError, UpdateEventUseCase},
    outgoing::{EventData, EventDetailView, EventQuery, EventRepository, EventRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateEventService<R, Q>
where
    R: EventRepository + Send + Sync,
    Q: EventQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateEventService<R, Q>
where
    R: EventRepository + Send + Sync,
    Q: EventQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateEventUseCase for UpdateEventService<R, Q>
where
    R: EventRepository + Send + Sync,
    Q: EventQuery + Send + Sync,
{
    async fn execute(
        &self,
        event_id: Uuid,
        command: EventCommand,
    ) -> Result<EventDetailView, UpdateEventError> {
        let data = EventData {
            name: command.name().to_string(),
            description: command.description().to_string(),
            date: command.date(),
            time: command.time(),
            location: command.location().to_string(),
            category_id: command.category_id(),
            image_path: command.image_path().to_string(),
        };

        self.repository
            .update_event(event_id, data)
            .await
            .map_err(|e| match e {
                EventRepositoryError::EventNotFound => UpdateEventError::EventNotFound,
                EventRepositoryError::CategoryNotFound => UpdateEventError::CategoryNotFound,
                other => UpdateEventError::RepositoryError(other.to_string()),
            })?;

        self.query
            .fetch_event_detail(event_id)
            .await
            .map_err(|e| UpdateEventError::RepositoryError(e.to_string()))
    }
}
