use async_trait::async_trait;

use crate::event::application::ports::{
    incoming::use_cases::{CreateEventError, CreateEventUseCase, EventCommand},
    outgoing::{EventData, EventDetailView, EventQuery, EventRepository, EventRepositoryError},
};

/// Writes the event, then reads it back through the query port so the
/// response carries the category name and (zero) participant count.
#[derive(Debug, Clone)]
pub struct CreateEventService<R, Q>
where
    R: EventRepository + Send + Sync,
    Q: EventQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreateEventService<R, Q>
where
    R: EventRepository + Send + Sync,
    Q: EventQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateEventUseCase for CreateEventService<R, Q>
where
    R: EventRepository + Send + Sync,
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self, command: EventCommand) -> Result<EventDetailView, CreateEventError> {
        let data = EventData {
            name: command.name().to_string(),
            description: command.description().to_string(),
            date: command.date(),
            time: command.time(),
            location: command.location().to_string(),
            category_id: command.category_id(),
            image_path: command.image_path().to_string(),
        };

        let record = self.repository.insert_event(data).await.map_err(|e| match e {
            EventRepositoryError::CategoryNotFound => CreateEventError::CategoryNotFound,
            other => CreateEventError::RepositoryError(other.to_string()),
        })?;

        self.query
            .fetch_event_detail(record.id)
            .await
            .map_err(|e| CreateEventError::RepositoryError(e.to_string()))
    }
}
