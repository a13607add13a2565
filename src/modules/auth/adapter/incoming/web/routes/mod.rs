mod activate_account;
mod change_password;
mod list_users;
mod login_user;
mod logout_user;
mod password_reset;
mod profile;
mod refresh_token;
mod register_user;

pub use activate_account::activate_account_handler;
pub use change_password::change_password_handler;
pub use list_users::list_users_handler;
pub use login_user::login_user_handler;
pub use logout_user::logout_user_handler;
pub use password_reset::{confirm_password_reset_handler, request_password_reset_handler};
pub use profile::{fetch_profile_handler, update_profile_handler};
pub use refresh_token::refresh_token_handler;
pub use register_user::register_user_handler;

// utoipa path companion structs referenced by the OpenAPI document.
pub use activate_account::__path_activate_account_handler;
pub use change_password::__path_change_password_handler;
pub use list_users::__path_list_users_handler;
pub use login_user::__path_login_user_handler;
pub use logout_user::__path_logout_user_handler;
pub use password_reset::{__path_confirm_password_reset_handler, __path_request_password_reset_handler};
pub use profile::{__path_fetch_profile_handler, __path_update_profile_handler};
pub use refresh_token::__path_refresh_token_handler;
pub use register_user::__path_register_user_handler;

// Request/response DTOs referenced by the OpenAPI document.
pub use activate_account::ActivateResponse;
pub use change_password::{ChangePasswordBody, ChangePasswordResponse};
pub use list_users::ListUsersQuery;
pub use password_reset::{ConfirmResetBody, RequestResetBody, ResetMessage};
pub use profile::{ProfileResponse, UpdateProfileBody};
pub use register_user::{RegisterRequest, RegisterResponse, RegisteredAccount};
