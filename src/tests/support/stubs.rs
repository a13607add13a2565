use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::role::Role;
use crate::auth::application::ports::outgoing::{ActivationOutcome, ProfileRecord};
use crate::auth::application::use_cases::activate_account::{
    ActivateAccountError, ActivateAccountInput, IActivateAccountUseCase,
};
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordInput, IChangePasswordUseCase,
};
use crate::auth::application::use_cases::confirm_password_reset::{
    ConfirmPasswordResetError, ConfirmPasswordResetInput, IConfirmPasswordResetUseCase,
};
use crate::auth::application::use_cases::create_account::{
    CreateAccountError, CreateAccountInput, CreateAccountOutput, ICreateAccountUseCase,
};
use crate::auth::application::use_cases::fetch_profile::{FetchProfileError, IFetchProfileUseCase};
use crate::auth::application::use_cases::list_users::{IListUsersUseCase, ListUsersError};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::logout_user::{
    ILogoutUserUseCase, LogoutError, LogoutRequest, LogoutResponse,
};
use crate::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::auth::application::use_cases::request_password_reset::{
    IRequestPasswordResetUseCase, RequestPasswordResetError, RequestPasswordResetInput,
};
use crate::auth::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError, UpdateProfileInput,
};

use crate::category::application::ports::incoming::use_cases::{
    CategoryCommand, CreateCategoryError, CreateCategoryUseCase, DeleteCategoryError,
    DeleteCategoryUseCase, ListCategoriesError, ListCategoriesUseCase, UpdateCategoryError,
    UpdateCategoryUseCase,
};
use crate::category::application::ports::outgoing::{CategoryRecord, CategoryView};

use crate::dashboard::application::ports::incoming::use_cases::{
    DashboardView, ViewDashboardError, ViewDashboardUseCase,
};

use crate::email::application::ports::outgoing::{
    AccountNotifier, NotificationError, RsvpEmailDetails, RsvpNotifier,
};

use crate::event::application::ports::incoming::use_cases::{
    CreateEventError, CreateEventUseCase, DeleteEventError, DeleteEventUseCase, EventCommand,
    EventDetail, GetEventError, GetEventUseCase, ListEventsError, ListEventsUseCase,
    RsvpEventError, RsvpEventUseCase, RsvpOutcome, UpdateEventError, UpdateEventUseCase,
};
use crate::event::application::ports::outgoing::{
    EventDetailView, EventListFilter, EventSort, EventSummaryView,
};

// ===== Auth =====

#[derive(Default, Clone)]
pub struct StubCreateAccountUseCase;

#[async_trait]
impl ICreateAccountUseCase for StubCreateAccountUseCase {
    async fn execute(
        &self,
        _input: CreateAccountInput,
    ) -> Result<CreateAccountOutput, CreateAccountError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAccountNotifier;

#[async_trait]
impl AccountNotifier for StubAccountNotifier {
    async fn send_activation_email(
        &self,
        _user_id: Uuid,
        _username: &str,
        _email: &str,
        _credential_fingerprint: &str,
    ) -> Result<(), NotificationError> {
        unimplemented!("Not used in this test")
    }

    async fn send_password_reset_email(
        &self,
        _user_id: Uuid,
        _username: &str,
        _email: &str,
        _reset_jti: &str,
    ) -> Result<(), NotificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRsvpNotifier;

#[async_trait]
impl RsvpNotifier for StubRsvpNotifier {
    async fn send_rsvp_confirmation(
        &self,
        _username: &str,
        _email: &str,
        _details: RsvpEmailDetails,
    ) -> Result<(), NotificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubActivateAccountUseCase;

#[async_trait]
impl IActivateAccountUseCase for StubActivateAccountUseCase {
    async fn execute(
        &self,
        _input: ActivateAccountInput,
    ) -> Result<ActivationOutcome, ActivateAccountError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUserUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubChangePasswordUseCase;

#[async_trait]
impl IChangePasswordUseCase for StubChangePasswordUseCase {
    async fn execute(&self, _input: ChangePasswordInput) -> Result<(), ChangePasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRequestPasswordResetUseCase;

#[async_trait]
impl IRequestPasswordResetUseCase for StubRequestPasswordResetUseCase {
    async fn execute(
        &self,
        _input: RequestPasswordResetInput,
    ) -> Result<(), RequestPasswordResetError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubConfirmPasswordResetUseCase;

#[async_trait]
impl IConfirmPasswordResetUseCase for StubConfirmPasswordResetUseCase {
    async fn execute(
        &self,
        _input: ConfirmPasswordResetInput,
    ) -> Result<(), ConfirmPasswordResetError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<ProfileRecord, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(&self, _input: UpdateProfileInput) -> Result<ProfileRecord, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, _role: Option<Role>) -> Result<Vec<ProfileRecord>, ListUsersError> {
        unimplemented!("Not used in this test")
    }
}

// ===== Categories =====

#[derive(Default, Clone)]
pub struct StubCreateCategoryUseCase;

#[async_trait]
impl CreateCategoryUseCase for StubCreateCategoryUseCase {
    async fn execute(
        &self,
        _command: CategoryCommand,
    ) -> Result<CategoryRecord, CreateCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListCategoriesUseCase;

#[async_trait]
impl ListCategoriesUseCase for StubListCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<CategoryView>, ListCategoriesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateCategoryUseCase;

#[async_trait]
impl UpdateCategoryUseCase for StubUpdateCategoryUseCase {
    async fn execute(
        &self,
        _category_id: Uuid,
        _command: CategoryCommand,
    ) -> Result<CategoryRecord, UpdateCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCategoryUseCase;

#[async_trait]
impl DeleteCategoryUseCase for StubDeleteCategoryUseCase {
    async fn execute(&self, _category_id: Uuid) -> Result<(), DeleteCategoryError> {
        unimplemented!("Not used in this test")
    }
}

// ===== Events =====

#[derive(Default, Clone)]
pub struct StubCreateEventUseCase;

#[async_trait]
impl CreateEventUseCase for StubCreateEventUseCase {
    async fn execute(&self, _command: EventCommand) -> Result<EventDetailView, CreateEventError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateEventUseCase;

#[async_trait]
impl UpdateEventUseCase for StubUpdateEventUseCase {
    async fn execute(
        &self,
        _event_id: Uuid,
        _command: EventCommand,
    ) -> Result<EventDetailView, UpdateEventError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteEventUseCase;

#[async_trait]
impl DeleteEventUseCase for StubDeleteEventUseCase {
    async fn execute(&self, _event_id: Uuid) -> Result<(), DeleteEventError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListEventsUseCase;

#[async_trait]
impl ListEventsUseCase for StubListEventsUseCase {
    async fn execute(
        &self,
        _filter: EventListFilter,
        _sort: EventSort,
    ) -> Result<Vec<EventSummaryView>, ListEventsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetEventUseCase;

#[async_trait]
impl GetEventUseCase for StubGetEventUseCase {
    async fn execute(
        &self,
        _event_id: Uuid,
        _viewer: Option<Uuid>,
    ) -> Result<EventDetail, GetEventError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRsvpEventUseCase;

#[async_trait]
impl RsvpEventUseCase for StubRsvpEventUseCase {
    async fn execute(&self, _event_id: Uuid, _user_id: Uuid) -> Result<RsvpOutcome, RsvpEventError> {
        unimplemented!("Not used in this test")
    }
}

// ===== Dashboard =====

#[derive(Default, Clone)]
pub struct StubViewDashboardUseCase;

#[async_trait]
impl ViewDashboardUseCase for StubViewDashboardUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _roles: &[Role],
    ) -> Result<DashboardView, ViewDashboardError> {
        unimplemented!("Not used in this test")
    }
}
