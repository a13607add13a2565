use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::access::{authorize, AccessDecision, STAFF_ROLES};
use crate::auth::application::domain::role::Role;
use crate::auth::application::ports::outgoing::token_provider::{TokenProvider, TokenType};
use crate::shared::api::ApiResponse;

/// Holder of a valid access token. Carries the role set straight from the
/// token claims; no database round trip per request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub roles: Vec<Role>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn unauthorized(message: &str) -> ActixError {
    create_api_error(ApiResponse::unauthorized("UNAUTHORIZED", message))
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(unauthorized(
                    "Missing or invalid authorization header",
                )));
            }
        };

        match token_provider.validate(&token, TokenType::Access) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
                roles: claims.role_set(),
            })),
            Err(_) => ready(Err(unauthorized("Invalid or expired token"))),
        }
    }
}

/// Authenticated user holding the Admin or Organizer role. Gates
/// category and event management.
#[derive(Debug, Clone)]
pub struct StaffUser {
    pub user_id: Uuid,
    pub roles: Vec<Role>,
}

impl FromRequest for StaffUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth_user_future = AuthenticatedUser::from_request(req, payload);

        match auth_user_future.into_inner() {
            Ok(auth_user) => {
                if authorize(&auth_user.roles, STAFF_ROLES) == AccessDecision::Denied {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "FORBIDDEN_ROLE",
                        "Requires an organizer or admin role",
                    ))));
                }

                ready(Ok(StaffUser {
                    user_id: auth_user.user_id,
                    roles: auth_user.roles,
                }))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

/// Authenticated user holding the Participant role. Gates the RSVP route.
#[derive(Debug, Clone)]
pub struct ParticipantUser {
    pub user_id: Uuid,
}

impl FromRequest for ParticipantUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth_user_future = AuthenticatedUser::from_request(req, payload);

        match auth_user_future.into_inner() {
            Ok(auth_user) => {
                if authorize(&auth_user.roles, &[Role::Participant]) == AccessDecision::Denied {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "RSVP_REQUIRES_PARTICIPANT",
                        "Only participants can RSVP to events",
                    ))));
                }

                ready(Ok(ParticipantUser {
                    user_id: auth_user.user_id,
                }))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
