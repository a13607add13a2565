use async_trait::async_trait;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Outcome
// ──────────────────────────────────────────────────────────
//

/// What an RSVP attempt did. Repeats are absorbed, never errors: under two
/// concurrent first RSVPs the attendance row's composite key guarantees one
/// caller sees `Confirmed` and the other `AlreadyConfirmed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpOutcome {
    /// Attendance row written; the confirmation email is on its way.
    Confirmed { event_name: String },

    /// The caller had already RSVP'd. No state change, no second email.
    AlreadyConfirmed,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RsvpEventError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RsvpEventUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<RsvpOutcome, RsvpEventError>;
}
