use actix_web::{put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::StaffUser,
    event::application::ports::incoming::use_cases::{
        EventCommand, EventCommandError, UpdateEventError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct UpdateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category_id: Uuid,
    pub image_path: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[put("/api/events/{event_id}")]
pub async fn update_event_handler(
    _staff: StaffUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateEventRequest>,
) -> impl Responder {
    let event_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match EventCommand::new(
        payload.name,
        payload.description,
        &payload.date,
        &payload.time,
        payload.location,
        payload.category_id,
        payload.image_path,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.event.update.execute(event_id, command).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(err) => map_update_event_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: EventCommandError) -> actix_web::HttpResponse {
    match err {
        EventCommandError::EmptyName => {
            ApiResponse::bad_request("EVENT_NAME_REQUIRED", "Event name cannot be empty")
        }
        EventCommandError::NameTooLong => ApiResponse::bad_request(
            "EVENT_NAME_TOO_LONG",
            "Event name must be at most 200 characters",
        ),
        EventCommandError::EmptyLocation => ApiResponse::bad_request(
            "EVENT_LOCATION_REQUIRED",
            "Event location cannot be empty",
        ),
        EventCommandError::LocationTooLong => ApiResponse::bad_request(
            "EVENT_LOCATION_TOO_LONG",
            "Event location must be at most 200 characters",
        ),
        EventCommandError::InvalidDate => ApiResponse::bad_request(
            "EVENT_DATE_INVALID",
            "Event date must be an ISO date (YYYY-MM-DD)",
        ),
        EventCommandError::InvalidTime => ApiResponse::bad_request(
            "EVENT_TIME_INVALID",
            "Event time must be HH:MM or HH:MM:SS",
        ),
    }
}

fn map_update_event_error(err: UpdateEventError) -> actix_web::HttpResponse {
    match err {
        UpdateEventError::EventNotFound => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        UpdateEventError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        UpdateEventError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
