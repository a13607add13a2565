use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::role::Role;
use crate::auth::application::ports::outgoing::ProfileRecord;
use crate::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::auth::application::use_cases::update_profile::{
    UpdateProfileError, UpdateProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, patch, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    #[schema(example = "ada_l")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "+4915112345678")]
    pub phone_number: Option<String>,
    pub profile_picture: String,
    pub is_active: bool,
    pub roles: Vec<Role>,
    pub date_joined: DateTime<Utc>,
}

impl From<ProfileRecord> for ProfileResponse {
    fn from(record: ProfileRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            first_name: record.first_name,
            last_name: record.last_name,
            phone_number: record.phone_number,
            profile_picture: record.profile_picture,
            is_active: record.is_active,
            roles: record.roles,
            date_joined: record.date_joined,
        }
    }
}

/// Fields absent from the body stay untouched.
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateProfileBody {
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
    #[schema(example = "+4915112345678")]
    pub phone_number: Option<String>,
    pub profile_picture: Option<String>,
}

/// Fetch the caller's profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Profile of the authenticated user",
            body = inline(SuccessResponse<ProfileResponse>),
        ),
        (
            status = 401,
            description = "Missing or invalid token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "UNAUTHORIZED",
                    "message": "Missing or invalid authorization header"
                }
            })
        ),
    )
)]
#[get("/api/users/me")]
pub async fn fetch_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.execute(user.user_id).await {
        Ok(record) => ApiResponse::success(ProfileResponse::from(record)),

        Err(FetchProfileError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Profile requested for vanished account");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchProfileError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Profile lookup failed");
            ApiResponse::internal_error()
        }
    }
}

/// Update the caller's profile
///
/// Partial update. Only the fields present in the body change.
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = "users",
    request_body = UpdateProfileBody,
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Updated profile",
            body = inline(SuccessResponse<ProfileResponse>),
        ),
        (
            status = 400,
            description = "Rejected field value",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_PHONE",
                    "message": "Phone number must be 7-15 digits, optionally prefixed with +"
                }
            })
        ),
    )
)]
#[patch("/api/users/me")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = req.into_inner();

    let result = data
        .auth
        .update_profile
        .execute(UpdateProfileInput {
            user_id: user.user_id,
            first_name: body.first_name,
            last_name: body.last_name,
            phone_number: body.phone_number,
            profile_picture: body.profile_picture,
        })
        .await;

    match result {
        Ok(record) => ApiResponse::success(ProfileResponse::from(record)),

        Err(e @ UpdateProfileError::EmptyFirstName) => {
            ApiResponse::bad_request("EMPTY_FIRST_NAME", &e.to_string())
        }

        Err(e @ UpdateProfileError::EmptyLastName) => {
            ApiResponse::bad_request("EMPTY_LAST_NAME", &e.to_string())
        }

        Err(e @ UpdateProfileError::InvalidPhone) => {
            ApiResponse::bad_request("INVALID_PHONE", &e.to_string())
        }

        Err(UpdateProfileError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Profile update for vanished account");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
