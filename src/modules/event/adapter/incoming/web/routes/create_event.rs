use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::StaffUser,
    event::application::ports::incoming::use_cases::{
        CreateEventError, EventCommand, EventCommandError,
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
struct CreateEventRequest {
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

#[post("/api/events")]
pub async fn create_event_handler(
    _staff: StaffUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateEventRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    // Validation happens in the command constructor
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

    match data.event.create.execute(command).await {
        Ok(detail) => ApiResponse::created(detail),
        Err(err) => map_create_event_error(err),
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

fn map_create_event_error(err: CreateEventError) -> actix_web::HttpResponse {
    match err {
        CreateEventError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        CreateEventError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
