use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::event::application::ports::outgoing::{CategoryRef, EventDetailView};

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

/// Detail payload for one event, personalized with the viewer's RSVP state.
/// Anonymous viewers always see `is_attending: false`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventDetail {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub image_path: String,
    pub category: CategoryRef,
    pub participant_count: i64,
    pub is_attending: bool,
}

impl EventDetail {
    pub fn from_view(view: EventDetailView, is_attending: bool) -> Self {
        Self {
            id: view.id,
            name: view.name,
            description: view.description,
            date: view.date,
            time: view.time,
            location: view.location,
            image_path: view.image_path,
            category: view.category,
            participant_count: view.participant_count,
            is_attending,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEventError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Failed to fetch event: {0}")]
    QueryFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetEventUseCase: Send + Sync {
    async fn execute(
        &self,
        event_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<EventDetail, GetEventError>;
}
