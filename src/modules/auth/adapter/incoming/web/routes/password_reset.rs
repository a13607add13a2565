use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::confirm_password_reset::{
    ConfirmPasswordResetError, ConfirmPasswordResetInput,
};
use crate::auth::application::use_cases::request_password_reset::RequestPasswordResetInput;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RequestResetBody {
    /// Email the reset link should go to
    #[schema(example = "ada@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct ResetMessage {
    message: &'static str,
}

/// Request a password reset
///
/// Always answers 200 with the same message whether or not the email is
/// registered, so the endpoint cannot be used to probe for accounts.
#[utoipa::path(
    post,
    path = "/api/auth/password-reset/request",
    tag = "auth",
    request_body = RequestResetBody,
    responses(
        (
            status = 200,
            description = "Accepted (whether or not the email exists)",
            body = inline(SuccessResponse<ResetMessage>),
            example = json!({
                "success": true,
                "data": {
                    "message": "If that email is registered, a password reset link has been sent."
                }
            })
        ),
    )
)]
#[post("/api/auth/password-reset/request")]
pub async fn request_password_reset_handler(
    req: web::Json<RequestResetBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Password reset requested");

    let result = data
        .auth
        .request_password_reset
        .execute(RequestPasswordResetInput {
            email: req.email.clone(),
        })
        .await;

    match result {
        Ok(()) => ApiResponse::success(ResetMessage {
            message: "If that email is registered, a password reset link has been sent.",
        }),

        Err(e) => {
            error!(error = %e, "Password reset request failed");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ConfirmResetBody {
    /// Reset token from the email link
    pub token: String,

    /// Replacement password
    #[schema(example = "new-horse-battery-7")]
    pub new_password: String,
}

/// Confirm a password reset
///
/// Consumes the newest reset token for the account and stores the new
/// password. Each token works at most once; requesting a new reset
/// invalidates older tokens.
#[utoipa::path(
    post,
    path = "/api/auth/password-reset/confirm",
    tag = "auth",
    request_body = ConfirmResetBody,
    responses(
        (
            status = 200,
            description = "Password replaced",
            body = inline(SuccessResponse<ResetMessage>),
            example = json!({
                "success": true,
                "data": { "message": "Password has been reset. You can now log in." }
            })
        ),
        (
            status = 400,
            description = "Bad token or weak password",
            body = ErrorResponse,
            examples(
                ("Invalid token" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_RESET_TOKEN",
                        "message": "Password reset token is invalid or has expired"
                    }
                }))),
                ("Weak password" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "PASSWORD_TOO_WEAK",
                        "message": "Password must be at least 8 characters and mix letters with digits"
                    }
                })))
            )
        ),
    )
)]
#[post("/api/auth/password-reset/confirm")]
pub async fn confirm_password_reset_handler(
    req: web::Json<ConfirmResetBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = req.into_inner();

    let result = data
        .auth
        .confirm_password_reset
        .execute(ConfirmPasswordResetInput {
            token: body.token,
            new_password: body.new_password,
        })
        .await;

    match result {
        Ok(()) => {
            info!("Password reset completed");
            ApiResponse::success(ResetMessage {
                message: "Password has been reset. You can now log in.",
            })
        }

        Err(ConfirmPasswordResetError::InvalidToken) => {
            warn!("Password reset rejected: invalid token");
            ApiResponse::bad_request(
                "INVALID_RESET_TOKEN",
                "Password reset token is invalid or has expired",
            )
        }

        Err(ConfirmPasswordResetError::WeakPassword) => ApiResponse::bad_request(
            "PASSWORD_TOO_WEAK",
            "Password must be at least 8 characters and mix letters with digits",
        ),

        Err(e) => {
            error!(error = %e, "Password reset confirmation failed");
            ApiResponse::internal_error()
        }
    }
}
