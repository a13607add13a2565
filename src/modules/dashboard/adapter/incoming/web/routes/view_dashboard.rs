use actix_web::{get, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    dashboard::application::ports::incoming::use_cases::ViewDashboardError,
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/api/dashboard")]
pub async fn view_dashboard_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.dashboard.view.execute(user.user_id, &user.roles).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_view_dashboard_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_view_dashboard_error(err: ViewDashboardError) -> actix_web::HttpResponse {
    match err {
        ViewDashboardError::QueryFailed(_) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
