use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::create_account::{CreateAccountError, CreateAccountInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for account signup
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Username (unique identifier)
    #[schema(example = "ada_l")]
    pub username: String,

    /// Email address
    #[schema(example = "ada@example.com")]
    pub email: String,

    /// Password (minimum 8 characters, letters and digits)
    #[schema(example = "correct-horse-9")]
    pub password: String,

    /// First name
    #[schema(example = "Ada")]
    pub first_name: String,

    /// Last name
    #[schema(example = "Lovelace")]
    pub last_name: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Success message
    #[schema(
        example = "Account created successfully. Please check your email to activate your account."
    )]
    message: String,

    /// Created account details
    user: RegisteredAccount,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredAccount {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Username
    #[schema(example = "ada_l")]
    username: String,

    /// Email address
    #[schema(example = "ada@example.com")]
    email: String,
}

fn map_create_account_error(err: CreateAccountError, req: &RegisterRequest) -> HttpResponse {
    match &err {
        CreateAccountError::InvalidUsername => {
            warn!(
                username = %req.username,
                email = %req.email,
                error = %err,
                "Invalid signup input"
            );
            ApiResponse::bad_request("INVALID_USERNAME", &err.to_string())
        }

        CreateAccountError::InvalidEmail => {
            warn!(
                username = %req.username,
                email = %req.email,
                error = %err,
                "Invalid signup input"
            );
            ApiResponse::bad_request("INVALID_EMAIL", &err.to_string())
        }

        CreateAccountError::WeakPassword => {
            warn!(
                username = %req.username,
                email = %req.email,
                error = %err,
                "Invalid signup input"
            );
            ApiResponse::bad_request("WEAK_PASSWORD", &err.to_string())
        }

        CreateAccountError::UsernameTaken => {
            warn!(username = %req.username, "Username already taken");
            ApiResponse::conflict("USERNAME_TAKEN", "Username is already taken")
        }

        CreateAccountError::EmailTaken => {
            warn!(email = %req.email, "Email already registered");
            ApiResponse::conflict("EMAIL_TAKEN", "Email is already registered")
        }

        other => {
            error!(
                username = %req.username,
                email = %req.email,
                error = %other,
                "Unhandled account creation error"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Sign up for an account
///
/// Creates an inactive account with the participant role and sends an
/// activation email. The account cannot log in until the activation link
/// is followed.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (
            status = 201,
            description = "Account created successfully",
            body = inline(SuccessResponse<RegisterResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Account created successfully. Please check your email to activate your account.",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "ada_l",
                        "email": "ada@example.com"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Invalid username" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_USERNAME",
                        "message": "Username must be 3-32 characters of letters, digits or underscores"
                    }
                }))),
                ("Invalid email" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_EMAIL",
                        "message": "Invalid email format"
                    }
                }))),
                ("Weak password" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "WEAK_PASSWORD",
                        "message": "Password must be at least 8 characters and mix letters with digits"
                    }
                })))
            )
        ),
        (
            status = 409,
            description = "Username or email already in use",
            body = ErrorResponse,
            examples(
                ("Username taken" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "USERNAME_TAKEN",
                        "message": "Username is already taken"
                    }
                }))),
                ("Email taken" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "EMAIL_TAKEN",
                        "message": "Email is already registered"
                    }
                })))
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let orchestrator = &data.auth.register;

    info!(
        username = %req.username,
        email = %req.email,
        "Signup attempt"
    );

    let input = CreateAccountInput {
        username: req.username.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
        first_name: req.first_name.clone(),
        last_name: req.last_name.clone(),
    };
    let result = orchestrator.register(input).await;

    match result {
        Ok(account) => {
            info!(
                user_id = %account.user_id,
                username = %account.username,
                email = %account.email,
                "Account created successfully"
            );

            ApiResponse::created(RegisterResponse {
                message: account.message,
                user: RegisteredAccount {
                    id: account.user_id.to_string(),
                    username: account.username,
                    email: account.email,
                },
            })
        }

        Err(crate::auth::application::orchestrator::RegistrationError::CreateAccountFailed(e)) => {
            map_create_account_error(e, &req)
        }
    }
}
