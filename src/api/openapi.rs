use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    ActivateResponse, ChangePasswordBody, ChangePasswordResponse, ConfirmResetBody,
    ProfileResponse, RegisterRequest, RegisterResponse, RegisteredAccount, RequestResetBody,
    ResetMessage, UpdateProfileBody,
};
use crate::auth::application::use_cases::login_user::{LoginRequest, LoginUserResponse};
use crate::auth::application::use_cases::logout_user::{LogoutRequest, LogoutResponse};
use crate::auth::application::use_cases::refresh_token::{RefreshTokenRequest, RefreshTokenResponse};

// Events
use crate::event::application::ports::incoming::use_cases::EventDetail;
use crate::event::application::ports::outgoing::{CategoryRef, EventSort, EventSummaryView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gatherly API",
        version = "1.0.0",
        description = "API documentation for the Gatherly event management backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::activate_account_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::change_password_handler,
        crate::auth::adapter::incoming::web::routes::request_password_reset_handler,
        crate::auth::adapter::incoming::web::routes::confirm_password_reset_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::fetch_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,
        crate::auth::adapter::incoming::web::routes::list_users_handler,

        // Public event endpoints
        crate::event::adapter::incoming::web::routes::list_events_handler,
        crate::event::adapter::incoming::web::routes::get_event_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequest,
            RegisterResponse,
            RegisteredAccount,
            ActivateResponse,
            LoginRequest,
            LoginUserResponse,
            LogoutRequest,
            LogoutResponse,
            RefreshTokenRequest,
            RefreshTokenResponse,
            ChangePasswordBody,
            ChangePasswordResponse,
            RequestResetBody,
            ConfirmResetBody,
            ResetMessage,
            ProfileResponse,
            UpdateProfileBody,

            // Event DTOs
            EventSummaryView,
            EventDetail,
            CategoryRef,
            EventSort
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Signup, activation and session endpoints"),
        (name = "users", description = "Profile and user administration endpoints"),
        (name = "categories", description = "Event category management endpoints"),
        (name = "events", description = "Event catalog and RSVP endpoints"),
        (name = "dashboard", description = "Role-keyed landing page endpoint"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
