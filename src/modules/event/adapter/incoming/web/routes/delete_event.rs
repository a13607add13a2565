use actix_web::{delete, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::StaffUser,
    event::application::ports::incoming::use_cases::DeleteEventError,
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct EventDeleted {
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[delete("/api/events/{event_id}")]
pub async fn delete_event_handler(
    _staff: StaffUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let event_id = path.into_inner();

    match data.event.delete.execute(event_id).await {
        Ok(()) => ApiResponse::success(EventDeleted {
            message: "Event deleted along with its attendance records.".to_string(),
        }),
        Err(err) => map_delete_event_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_event_error(err: DeleteEventError) -> actix_web::HttpResponse {
    match err {
        DeleteEventError::EventNotFound => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        DeleteEventError::DatabaseError(_) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
