use crate::api::schemas::SuccessResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::logout_user::{LogoutError, LogoutRequest, LogoutResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};

/// Log out
///
/// Revokes the supplied refresh token so it can no longer mint access
/// tokens. Always answers 200: from the client's point of view the session
/// is over either way.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutRequest,
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Logged out",
            body = inline(SuccessResponse<LogoutResponse>),
            example = json!({
                "success": true,
                "data": { "message": "Logged out successfully" }
            })
        ),
        (
            status = 401,
            description = "Missing or invalid access token",
        ),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    req: web::Json<LogoutRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();

    info!(user_id = %user.user_id, "Logout attempt");

    match data.auth.logout.execute(request).await {
        Ok(response) => {
            info!(user_id = %user.user_id, "User logged out");
            ApiResponse::success(response)
        }

        // The client is logged out either way; a denylist hiccup only means
        // the refresh token dies by expiry instead of revocation.
        Err(LogoutError::RevocationFailed(ref e)) => {
            error!(user_id = %user.user_id, error = %e, "Token revocation failed during logout");
            ApiResponse::success(LogoutResponse {
                message: "Logged out successfully".to_string(),
            })
        }
    }
}
