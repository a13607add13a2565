use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Write DTOs
// ──────────────────────────────────────────────────────────
//

/// Column values for an insert or full-replace update.
#[derive(Debug, Clone)]
pub struct EventData {
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub category_id: Uuid,
    pub image_path: String,
}

#[derive(Debug, Clone)]
pub struct EventRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub category_id: Uuid,
    pub image_path: String,
}

/// What inserting an attendance row did. The composite primary key absorbs
/// repeats, so a second RSVP is reported instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpInsert {
    Created,
    AlreadyExists,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventRepositoryError {
    #[error("Event not found")]
    EventNotFound,

    /// The referenced category does not exist (foreign-key violation).
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert_event(&self, data: EventData) -> Result<EventRecord, EventRepositoryError>;

    async fn update_event(
        &self,
        event_id: Uuid,
        data: EventData,
    ) -> Result<EventRecord, EventRepositoryError>;

    /// Cascades to the event's attendance rows at the database level.
    async fn delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError>;

    /// Records the caller's RSVP. A duplicate key is reported as
    /// `AlreadyExists`; a missing event surfaces as `EventNotFound`.
    async fn insert_attendance(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<RsvpInsert, EventRepositoryError>;
}
