use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// The category an event belongs to, as carried by event views.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryRef {
    pub id: Uuid,
    pub name: String,
}

/// Listing card: everything the event list shows, without the description.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventSummaryView {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub image_path: String,
    pub category: CategoryRef,
    pub participant_count: i64,
}

/// Full read model for one event.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventDetailView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub image_path: String,
    pub category: CategoryRef,
    pub participant_count: i64,
}

/// Listing filters, AND-combined. The date range is applied only when BOTH
/// bounds are present; a lone `date_from` or `date_to` is ignored, matching
/// the behavior the frontend has always relied on.
#[derive(Debug, Clone, Default)]
pub struct EventListFilter {
    /// Case-insensitive substring match over name OR location.
    pub search: Option<String>,
    pub category_id: Option<Uuid>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventSort {
    DateAsc,
    DateDesc,
}

impl Default for EventSort {
    fn default() -> Self {
        EventSort::DateAsc
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventQueryError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EventQuery: Send + Sync {
    async fn list_events(
        &self,
        filter: EventListFilter,
        sort: EventSort,
    ) -> Result<Vec<EventSummaryView>, EventQueryError>;

    async fn fetch_event_detail(&self, event_id: Uuid)
        -> Result<EventDetailView, EventQueryError>;

    async fn is_attending(&self, event_id: Uuid, user_id: Uuid)
        -> Result<bool, EventQueryError>;

    /// Events the user has RSVP'd to, date-ascending. Serves the
    /// participant dashboard.
    async fn list_attending(&self, user_id: Uuid)
        -> Result<Vec<EventSummaryView>, EventQueryError>;

    /// Serves the staff dashboards.
    async fn count_events(&self) -> Result<u64, EventQueryError>;
}
