use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::ParticipantUser,
    event::application::ports::incoming::use_cases::{RsvpEventError, RsvpOutcome},
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct RsvpResponse {
    pub status: String,
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/events/{event_id}/rsvp")]
pub async fn rsvp_event_handler(
    participant: ParticipantUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let event_id = path.into_inner();

    match data.event.rsvp.execute(event_id, participant.user_id).await {
        Ok(RsvpOutcome::Confirmed { event_name }) => ApiResponse::success(RsvpResponse {
            status: "confirmed".to_string(),
            message: format!("You have successfully RSVP'd to {event_name}!"),
        }),
        Ok(RsvpOutcome::AlreadyConfirmed) => ApiResponse::success(RsvpResponse {
            status: "already_confirmed".to_string(),
            message: "You have already RSVP'd to this event.".to_string(),
        }),
        Err(err) => map_rsvp_event_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_rsvp_event_error(err: RsvpEventError) -> actix_web::HttpResponse {
    match err {
        RsvpEventError::EventNotFound => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        RsvpEventError::DatabaseError(_) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
