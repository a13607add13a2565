use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordBody {
    /// Password currently on the account
    pub current_password: String,

    /// Replacement password
    #[schema(example = "new-horse-battery-7")]
    pub new_password: String,
}

#[derive(Serialize, ToSchema)]
pub struct ChangePasswordResponse {
    message: &'static str,
}

/// Change the password
///
/// Re-authenticates with the current password before accepting the new one.
#[utoipa::path(
    post,
    path = "/api/auth/password",
    tag = "auth",
    request_body = ChangePasswordBody,
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Password changed",
            body = inline(SuccessResponse<ChangePasswordResponse>),
            example = json!({
                "success": true,
                "data": { "message": "Password changed successfully." }
            })
        ),
        (
            status = 400,
            description = "New password too weak",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "WEAK_PASSWORD",
                    "message": "Password must be at least 8 characters and mix letters with digits"
                }
            })
        ),
        (
            status = 403,
            description = "Current password wrong",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CURRENT_PASSWORD",
                    "message": "Current password is incorrect"
                }
            })
        ),
    )
)]
#[post("/api/auth/password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = req.into_inner();

    let result = data
        .auth
        .change_password
        .execute(ChangePasswordInput {
            user_id: user.user_id,
            current_password: body.current_password,
            new_password: body.new_password,
        })
        .await;

    match result {
        Ok(()) => {
            info!(user_id = %user.user_id, "Password changed");
            ApiResponse::success(ChangePasswordResponse {
                message: "Password changed successfully.",
            })
        }

        Err(ChangePasswordError::CurrentPasswordIncorrect) => {
            warn!(user_id = %user.user_id, "Password change rejected: wrong current password");
            ApiResponse::forbidden("INVALID_CURRENT_PASSWORD", "Current password is incorrect")
        }

        Err(ChangePasswordError::WeakPassword) => ApiResponse::bad_request(
            "WEAK_PASSWORD",
            "Password must be at least 8 characters and mix letters with digits",
        ),

        Err(ChangePasswordError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Password change for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}
