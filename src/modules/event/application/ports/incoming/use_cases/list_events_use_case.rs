use async_trait::async_trait;

use crate::event::application::ports::outgoing::{EventListFilter, EventSort, EventSummaryView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEventsError {
    #[error("Failed to fetch events: {0}")]
    QueryFailed(String),
}

/// Public event listing with search, category and date-range filters.
#[async_trait]
pub trait ListEventsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: EventListFilter,
        sort: EventSort,
    ) -> Result<Vec<EventSummaryView>, ListEventsError>;
}
