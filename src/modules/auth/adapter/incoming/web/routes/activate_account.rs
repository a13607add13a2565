use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::outgoing::ActivationOutcome;
use crate::auth::application::use_cases::activate_account::{
    ActivateAccountError, ActivateAccountInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct ActivateResponse {
    /// `activated` on the first visit, `already_active` on repeats
    #[schema(example = "activated")]
    status: &'static str,

    #[schema(example = "Account activated. You can now log in.")]
    message: &'static str,
}

/// Activate an account
///
/// Target of the link in the activation email. Idempotent: following the
/// link twice reports the account as already active instead of failing.
#[utoipa::path(
    get,
    path = "/api/auth/activate/{user_id}/{token}",
    tag = "auth",
    params(
        ("user_id" = Uuid, Path, description = "User the link was issued for"),
        ("token" = String, Path, description = "Activation token from the email"),
    ),
    responses(
        (
            status = 200,
            description = "Account active",
            body = inline(SuccessResponse<ActivateResponse>),
            example = json!({
                "success": true,
                "data": {
                    "status": "activated",
                    "message": "Account activated. You can now log in."
                }
            })
        ),
        (
            status = 400,
            description = "Expired, tampered or mismatched link",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_ACTIVATION_LINK",
                    "message": "Activation link is invalid or has expired"
                }
            })
        ),
    )
)]
#[get("/api/auth/activate/{user_id}/{token}")]
pub async fn activate_account_handler(
    path: web::Path<(Uuid, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (user_id, token) = path.into_inner();

    let result = data
        .auth
        .activate
        .execute(ActivateAccountInput { user_id, token })
        .await;

    match result {
        Ok(ActivationOutcome::Activated) => {
            info!(user_id = %user_id, "Account activated");
            ApiResponse::success(ActivateResponse {
                status: "activated",
                message: "Account activated. You can now log in.",
            })
        }

        Ok(ActivationOutcome::AlreadyActive) => ApiResponse::success(ActivateResponse {
            status: "already_active",
            message: "Account is already active.",
        }),

        Err(ActivateAccountError::InvalidLink) => {
            warn!(user_id = %user_id, "Rejected activation link");
            ApiResponse::bad_request(
                "INVALID_ACTIVATION_LINK",
                "Activation link is invalid or has expired",
            )
        }

        Err(e) => {
            error!(user_id = %user_id, error = %e, "Account activation failed");
            ApiResponse::internal_error()
        }
    }
}
