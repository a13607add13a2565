use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    event::application::ports::incoming::use_cases::{EventDetail, GetEventError},
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Event detail
///
/// Public detail view. When the caller presents a valid access token the
/// payload also reports whether they have RSVP'd (`is_attending`).
#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = "events",
    params(
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (
            status = 200,
            description = "Event found",
            body = inline(SuccessResponse<EventDetail>)
        ),
        (status = 404, description = "Unknown event", body = ErrorResponse)
    )
)]
#[get("/api/events/{event_id}")]
pub async fn get_event_handler(
    viewer: Option<AuthenticatedUser>,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let event_id = path.into_inner();

    // A missing or invalid token degrades to an anonymous view.
    let viewer_id = viewer.map(|v| v.user_id);

    match data.event.get.execute(event_id, viewer_id).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(err) => map_get_event_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_get_event_error(err: GetEventError) -> actix_web::HttpResponse {
    match err {
        GetEventError::EventNotFound => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        GetEventError::QueryFailed(_) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
