use async_trait::async_trait;

use crate::event::application::ports::{
    incoming::use_cases::{ListEventsError, ListEventsUseCase},
    outgoing::{EventListFilter, EventQuery, EventSort, EventSummaryView},
};

#[derive(Debug, Clone)]
pub struct ListEventsService<Q>
where
    Q: EventQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListEventsService<Q>
where
    Q: EventQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListEventsUseCase for ListEventsService<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: EventListFilter,
        sort: EventSort,
    ) -> Result<Vec<EventSummaryView>, ListEventsError> {
        self.query
            .list_events(filter, sort)
            .await
            .map_err(|e| ListEventsError::QueryFailed(e.to_string()))
    }
}
