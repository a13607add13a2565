pub mod activate_account;
pub mod change_password;
pub mod confirm_password_reset;
pub mod create_account;
pub mod fetch_profile;
pub mod list_users;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
pub mod request_password_reset;
pub mod update_profile;
