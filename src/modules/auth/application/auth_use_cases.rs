use std::sync::Arc;

use crate::auth::application::orchestrator::RegistrationOrchestrator;
use crate::auth::application::use_cases::{
    activate_account::IActivateAccountUseCase, change_password::IChangePasswordUseCase,
    confirm_password_reset::IConfirmPasswordResetUseCase, fetch_profile::IFetchProfileUseCase,
    list_users::IListUsersUseCase, login_user::ILoginUserUseCase, logout_user::ILogoutUserUseCase,
    refresh_token::IRefreshTokenUseCase, request_password_reset::IRequestPasswordResetUseCase,
    update_profile::IUpdateProfileUseCase,
};

/// Auth entry points handed to the web layer as one `web::Data` bundle.
#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<RegistrationOrchestrator>,
    pub activate: Arc<dyn IActivateAccountUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUserUseCase + Send + Sync>,
    pub refresh: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub change_password: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    pub request_password_reset: Arc<dyn IRequestPasswordResetUseCase + Send + Sync>,
    pub confirm_password_reset: Arc<dyn IConfirmPasswordResetUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
}
