use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::refresh_token::{
    RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

/// Refresh the token pair
///
/// Exchanges a live refresh token for a new access/refresh pair. Tokens
/// revoked by logout are rejected until they would have expired anyway.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequest,
    responses(
        (
            status = 200,
            description = "New token pair",
            body = inline(SuccessResponse<RefreshTokenResponse>),
            example = json!({
                "success": true,
                "data": {
                    "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "refresh_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "expires_in": 1800
                }
            })
        ),
        (
            status = 401,
            description = "Expired, invalid or revoked refresh token",
            body = ErrorResponse,
            examples(
                ("Expired" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "TOKEN_EXPIRED",
                        "message": "Refresh token has expired. Please log in again."
                    }
                }))),
                ("Revoked" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "TOKEN_REVOKED",
                        "message": "Refresh token has been revoked. Please log in again."
                    }
                })))
            )
        ),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();

    info!("Token refresh attempt");

    match data.auth.refresh.execute(request).await {
        Ok(response) => {
            info!("Token refreshed successfully");
            ApiResponse::success(response)
        }

        Err(RefreshTokenError::TokenExpired) => {
            warn!("Token refresh failed: token expired");
            ApiResponse::unauthorized(
                "TOKEN_EXPIRED",
                "Refresh token has expired. Please log in again.",
            )
        }

        Err(RefreshTokenError::TokenInvalid) => {
            warn!("Token refresh failed: invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::TokenRevoked) => {
            warn!("Token refresh failed: token revoked");
            ApiResponse::unauthorized(
                "TOKEN_REVOKED",
                "Refresh token has been revoked. Please log in again.",
            )
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }

        Err(RefreshTokenError::DenylistError(ref e)) => {
            error!(error = %e, "Denylist check failed during refresh");
            ApiResponse::internal_error()
        }
    }
}
