use actix_web::{get, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    event::application::ports::incoming::use_cases::ListEventsError,
    event::application::ports::outgoing::{EventListFilter, EventSort, EventSummaryView},
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListEventsQuery {
    /// Case-insensitive substring matched against event name or location.
    pub search: Option<String>,
    /// Restrict to a single category.
    pub category: Option<Uuid>,
    /// Inclusive lower date bound; honored only together with `end_date`.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper date bound; honored only together with `start_date`.
    pub end_date: Option<NaiveDate>,
    /// `date_asc` (default) or `date_desc`.
    #[serde(default)]
    pub sort: EventSort,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// List events
///
/// Public listing with optional search, category, and date-range filters.
/// Each entry carries its category and participant count.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    params(ListEventsQuery),
    responses(
        (
            status = 200,
            description = "Events matching the filters",
            body = inline(SuccessResponse<Vec<EventSummaryView>>)
        ),
        (status = 500, description = "Query failed", body = ErrorResponse)
    )
)]
#[get("/api/events")]
pub async fn list_events_handler(
    data: web::Data<AppState>,
    query: web::Query<ListEventsQuery>,
) -> impl Responder {
    let query = query.into_inner();

    let filter = EventListFilter {
        search: query.search,
        category_id: query.category,
        date_from: query.start_date,
        date_to: query.end_date,
    };

    match data.event.list.execute(filter, query.sort).await {
        Ok(events) => ApiResponse::success(events),
        Err(err) => map_list_events_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_list_events_error(err: ListEventsError) -> actix_web::HttpResponse {
    match err {
        ListEventsError::QueryFailed(_) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
