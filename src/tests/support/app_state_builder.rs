use crate::auth::application::orchestrator::RegistrationOrchestrator;
use crate::auth::application::use_cases::{
    activate_account::IActivateAccountUseCase, change_password::IChangePasswordUseCase,
    confirm_password_reset::IConfirmPasswordResetUseCase, fetch_profile::IFetchProfileUseCase,
    list_users::IListUsersUseCase, login_user::ILoginUserUseCase, logout_user::ILogoutUserUseCase,
    refresh_token::IRefreshTokenUseCase, request_password_reset::IRequestPasswordResetUseCase,
    update_profile::IUpdateProfileUseCase,
};
use crate::auth::application::AuthUseCases;
use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, DeleteCategoryUseCase, ListCategoriesUseCase, UpdateCategoryUseCase,
};
use crate::category::application::CategoryUseCases;
use crate::dashboard::application::ports::incoming::use_cases::ViewDashboardUseCase;
use crate::dashboard::application::DashboardUseCases;
use crate::event::application::ports::incoming::use_cases::{
    CreateEventUseCase, DeleteEventUseCase, GetEventUseCase, ListEventsUseCase, RsvpEventUseCase,
    UpdateEventUseCase,
};
use crate::event::application::EventUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every slot starts as a panicking stub, so a handler reaching for a
/// use case its test never wired fails loudly instead of silently.
pub struct TestAppStateBuilder {
    register: Option<Arc<RegistrationOrchestrator>>,
    activate: Option<Arc<dyn IActivateAccountUseCase + Send + Sync>>,
    login: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    logout: Option<Arc<dyn ILogoutUserUseCase + Send + Sync>>,
    refresh: Option<Arc<dyn IRefreshTokenUseCase + Send + Sync>>,
    change_password: Option<Arc<dyn IChangePasswordUseCase + Send + Sync>>,
    request_password_reset: Option<Arc<dyn IRequestPasswordResetUseCase + Send + Sync>>,
    confirm_password_reset: Option<Arc<dyn IConfirmPasswordResetUseCase + Send + Sync>>,
    fetch_profile: Option<Arc<dyn IFetchProfileUseCase + Send + Sync>>,
    update_profile: Option<Arc<dyn IUpdateProfileUseCase + Send + Sync>>,
    list_users: Option<Arc<dyn IListUsersUseCase + Send + Sync>>,
    create_category: Option<Arc<dyn CreateCategoryUseCase + Send + Sync>>,
    list_categories: Option<Arc<dyn ListCategoriesUseCase + Send + Sync>>,
    update_category: Option<Arc<dyn UpdateCategoryUseCase + Send + Sync>>,
    delete_category: Option<Arc<dyn DeleteCategoryUseCase + Send + Sync>>,
    create_event: Option<Arc<dyn CreateEventUseCase + Send + Sync>>,
    update_event: Option<Arc<dyn UpdateEventUseCase + Send + Sync>>,
    delete_event: Option<Arc<dyn DeleteEventUseCase + Send + Sync>>,
    list_events: Option<Arc<dyn ListEventsUseCase + Send + Sync>>,
    get_event: Option<Arc<dyn GetEventUseCase + Send + Sync>>,
    rsvp_event: Option<Arc<dyn RsvpEventUseCase + Send + Sync>>,
    dashboard: Option<Arc<dyn ViewDashboardUseCase + Send + Sync>>,
}

pub fn default_test_registration_orchestrator() -> Arc<RegistrationOrchestrator> {
    Arc::new(RegistrationOrchestrator::new(
        Arc::new(StubCreateAccountUseCase),
        Arc::new(StubAccountNotifier),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register: Some(default_test_registration_orchestrator()),
            activate: Some(Arc::new(StubActivateAccountUseCase)),
            login: Some(Arc::new(StubLoginUserUseCase)),
            logout: Some(Arc::new(StubLogoutUserUseCase)),
            refresh: Some(Arc::new(StubRefreshTokenUseCase)),
            change_password: Some(Arc::new(StubChangePasswordUseCase)),
            request_password_reset: Some(Arc::new(StubRequestPasswordResetUseCase)),
            confirm_password_reset: Some(Arc::new(StubConfirmPasswordResetUseCase)),
            fetch_profile: Some(Arc::new(StubFetchProfileUseCase)),
            update_profile: Some(Arc::new(StubUpdateProfileUseCase)),
            list_users: Some(Arc::new(StubListUsersUseCase)),
            create_category: Some(Arc::new(StubCreateCategoryUseCase)),
            list_categories: Some(Arc::new(StubListCategoriesUseCase)),
            update_category: Some(Arc::new(StubUpdateCategoryUseCase)),
            delete_category: Some(Arc::new(StubDeleteCategoryUseCase)),
            create_event: Some(Arc::new(StubCreateEventUseCase)),
            update_event: Some(Arc::new(StubUpdateEventUseCase)),
            delete_event: Some(Arc::new(StubDeleteEventUseCase)),
            list_events: Some(Arc::new(StubListEventsUseCase)),
            get_event: Some(Arc::new(StubGetEventUseCase)),
            rsvp_event: Some(Arc::new(StubRsvpEventUseCase)),
            dashboard: Some(Arc::new(StubViewDashboardUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register(mut self, orchestrator: Arc<RegistrationOrchestrator>) -> Self {
        self.register = Some(orchestrator);
        self
    }

    pub fn with_activate(
        mut self,
        uc: impl IActivateAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.activate = Some(Arc::new(uc));
        self
    }

    pub fn with_login(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login = Some(Arc::new(uc));
        self
    }

    pub fn with_logout(mut self, uc: impl ILogoutUserUseCase + Send + Sync + 'static) -> Self {
        self.logout = Some(Arc::new(uc));
        self
    }

    pub fn with_refresh(mut self, uc: impl IRefreshTokenUseCase + Send + Sync + 'static) -> Self {
        self.refresh = Some(Arc::new(uc));
        self
    }

    pub fn with_change_password(
        mut self,
        uc: impl IChangePasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.change_password = Some(Arc::new(uc));
        self
    }

    pub fn with_request_password_reset(
        mut self,
        uc: impl IRequestPasswordResetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.request_password_reset = Some(Arc::new(uc));
        self
    }

    pub fn with_confirm_password_reset(
        mut self,
        uc: impl IConfirmPasswordResetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.confirm_password_reset = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl IUpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_list_users(mut self, uc: impl IListUsersUseCase + Send + Sync + 'static) -> Self {
        self.list_users = Some(Arc::new(uc));
        self
    }

    pub fn with_create_category(
        mut self,
        uc: impl CreateCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_category = Some(Arc::new(uc));
        self
    }

    pub fn with_list_categories(
        mut self,
        uc: impl ListCategoriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_categories = Some(Arc::new(uc));
        self
    }

    pub fn with_update_category(
        mut self,
        uc: impl UpdateCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_category = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_category(
        mut self,
        uc: impl DeleteCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_category = Some(Arc::new(uc));
        self
    }

    pub fn with_create_event(mut self, uc: impl CreateEventUseCase + Send + Sync + 'static) -> Self {
        self.create_event = Some(Arc::new(uc));
        self
    }

    pub fn with_update_event(mut self, uc: impl UpdateEventUseCase + Send + Sync + 'static) -> Self {
        self.update_event = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_event(mut self, uc: impl DeleteEventUseCase + Send + Sync + 'static) -> Self {
        self.delete_event = Some(Arc::new(uc));
        self
    }

    pub fn with_list_events(mut self, uc: impl ListEventsUseCase + Send + Sync + 'static) -> Self {
        self.list_events = Some(Arc::new(uc));
        self
    }

    pub fn with_get_event(mut self, uc: impl GetEventUseCase + Send + Sync + 'static) -> Self {
        self.get_event = Some(Arc::new(uc));
        self
    }

    pub fn with_rsvp_event(mut self, uc: impl RsvpEventUseCase + Send + Sync + 'static) -> Self {
        self.rsvp_event = Some(Arc::new(uc));
        self
    }

    pub fn with_dashboard(mut self, uc: impl ViewDashboardUseCase + Send + Sync + 'static) -> Self {
        self.dashboard = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: AuthUseCases {
                register: self.register.unwrap(),
                activate: self.activate.unwrap(),
                login: self.login.unwrap(),
                logout: self.logout.unwrap(),
                refresh: self.refresh.unwrap(),
                change_password: self.change_password.unwrap(),
                request_password_reset: self.request_password_reset.unwrap(),
                confirm_password_reset: self.confirm_password_reset.unwrap(),
                fetch_profile: self.fetch_profile.unwrap(),
                update_profile: self.update_profile.unwrap(),
                list_users: self.list_users.unwrap(),
            },
            category: CategoryUseCases {
                create: self.create_category.unwrap(),
                list: self.list_categories.unwrap(),
                update: self.update_category.unwrap(),
                delete: self.delete_category.unwrap(),
            },
            event: EventUseCases {
                create: self.create_event.unwrap(),
                update: self.update_event.unwrap(),
                delete: self.delete_event.unwrap(),
                list: self.list_events.unwrap(),
                get: self.get_event.unwrap(),
                rsvp: self.rsvp_event.unwrap(),
            },
            dashboard: DashboardUseCases {
                view: self.dashboard.unwrap(),
            },
        })
    }
}
