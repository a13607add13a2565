use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::auth::application::domain::role::Role;
use crate::auth::application::use_cases::list_users::ListUsersError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use super::profile::ProfileResponse;

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct ListUsersQuery {
    /// Narrow the listing to holders of one role
    #[param(example = "participant")]
    pub role: Option<String>,
}

/// List user profiles
///
/// Staff only. `?role=` narrows the listing to holders of that role.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(ListUsersQuery),
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Profiles sorted by username",
            body = inline(SuccessResponse<Vec<ProfileResponse>>),
        ),
        (
            status = 400,
            description = "Unknown role value",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_ROLE",
                    "message": "Unknown role: superuser"
                }
            })
        ),
        (
            status = 403,
            description = "Caller is not staff",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "FORBIDDEN_ROLE",
                    "message": "Requires an organizer or admin role"
                }
            })
        ),
    )
)]
#[get("/api/users")]
pub async fn list_users_handler(
    staff: StaffUser,
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let role = match query.into_inner().role {
        Some(raw) => match Role::parse(raw.trim()) {
            Some(role) => Some(role),
            None => {
                return ApiResponse::bad_request("INVALID_ROLE", &format!("Unknown role: {raw}"));
            }
        },
        None => None,
    };

    match data.auth.list_users.execute(role).await {
        Ok(profiles) => ApiResponse::success(
            profiles
                .into_iter()
                .map(ProfileResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListUsersError::QueryError(e)) => {
            error!(user_id = %staff.user_id, error = %e, "User listing failed");
            ApiResponse::internal_error()
        }
    }
}
