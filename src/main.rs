pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::category;
pub use modules::dashboard;
pub use modules::email;
pub use modules::event;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_denylist_redis::RedisTokenDenylist;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::orchestrator::RegistrationOrchestrator;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    activate_account::ActivateAccountUseCase,
    change_password::ChangePasswordUseCase,
    confirm_password_reset::ConfirmPasswordResetUseCase,
    create_account::{CreateAccountUseCase, ICreateAccountUseCase},
    fetch_profile::FetchProfileUseCase,
    list_users::ListUsersUseCase,
    login_user::LoginUserUseCase,
    logout_user::LogoutUserUseCase,
    refresh_token::RefreshTokenUseCase,
    request_password_reset::RequestPasswordResetUseCase,
    update_profile::UpdateProfileUseCase,
};
use crate::auth::application::AuthUseCases;

use crate::category::adapter::outgoing::{CategoryQueryPostgres, CategoryRepositoryPostgres};
use crate::category::application::services::{
    CreateCategoryService, DeleteCategoryService, ListCategoriesService, UpdateCategoryService,
};
use crate::category::application::CategoryUseCases;

use crate::dashboard::application::services::ViewDashboardService;
use crate::dashboard::application::DashboardUseCases;

use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::{AccountNotifier, RsvpNotifier};
use crate::email::application::services::NotificationService;

use crate::event::adapter::outgoing::{EventQueryPostgres, EventRepositoryPostgres};
use crate::event::application::services::{
    CreateEventService, DeleteEventService, GetEventService, ListEventsService, RsvpEventService,
    UpdateEventService,
};
use crate::event::application::EventUseCases;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

/// Use-case bundles handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub category: CategoryUseCases,
    pub event: EventUseCases,
    pub dashboard: DashboardUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    // SMTP SETUPS
    let from_email = std::env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if std::env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = std::env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Activation and reset links in outgoing mail point at this origin.
    let base_url =
        std::env::var("APP_BASE_URL").unwrap_or_else(|_| format!("http://{server_url}"));

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Shared outgoing adapters
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(JwtConfig::from_env()));
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env());

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let denylist = RedisTokenDenylist::new(Arc::clone(&redis_arc));

    let notifications = Arc::new(NotificationService::new(
        Arc::new(smtp_sender),
        Arc::clone(&token_provider),
        &base_url,
    ));
    let account_notifier: Arc<dyn AccountNotifier + Send + Sync> = Arc::clone(&notifications)
        as Arc<dyn AccountNotifier + Send + Sync>;
    let rsvp_notifier: Arc<dyn RsvpNotifier + Send + Sync> = notifications;

    // Registration components
    let create_account: Arc<dyn ICreateAccountUseCase + Send + Sync> = Arc::new(
        CreateAccountUseCase::new(user_repo.clone(), Arc::clone(&password_hasher)),
    );
    let registration =
        RegistrationOrchestrator::new(create_account, Arc::clone(&account_notifier));

    let auth = AuthUseCases {
        register: Arc::new(registration),
        activate: Arc::new(ActivateAccountUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&token_provider),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        logout: Arc::new(LogoutUserUseCase::new(
            denylist.clone(),
            Arc::clone(&token_provider),
        )),
        refresh: Arc::new(RefreshTokenUseCase::new(
            denylist.clone(),
            Arc::clone(&token_provider),
        )),
        change_password: Arc::new(ChangePasswordUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
        )),
        request_password_reset: Arc::new(RequestPasswordResetUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&account_notifier),
        )),
        confirm_password_reset: Arc::new(ConfirmPasswordResetUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        fetch_profile: Arc::new(FetchProfileUseCase::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileUseCase::new(
            user_query.clone(),
            user_repo.clone(),
        )),
        list_users: Arc::new(ListUsersUseCase::new(user_query.clone())),
    };

    // Category components
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db_arc));
    let category_query = CategoryQueryPostgres::new(Arc::clone(&db_arc));

    let category = CategoryUseCases {
        create: Arc::new(CreateCategoryService::new(category_repo.clone())),
        list: Arc::new(ListCategoriesService::new(category_query.clone())),
        update: Arc::new(UpdateCategoryService::new(category_repo.clone())),
        delete: Arc::new(DeleteCategoryService::new(category_repo.clone())),
    };

    // Event components
    let event_repo = EventRepositoryPostgres::new(Arc::clone(&db_arc));
    let event_query = EventQueryPostgres::new(Arc::clone(&db_arc));

    let event = EventUseCases {
        create: Arc::new(CreateEventService::new(
            event_repo.clone(),
            event_query.clone(),
        )),
        update: Arc::new(UpdateEventService::new(
            event_repo.clone(),
            event_query.clone(),
        )),
        delete: Arc::new(DeleteEventService::new(event_repo.clone())),
        list: Arc::new(ListEventsService::new(event_query.clone())),
        get: Arc::new(GetEventService::new(event_query.clone())),
        rsvp: Arc::new(RsvpEventService::new(
            event_repo.clone(),
            event_query.clone(),
            Arc::new(user_query.clone()),
            rsvp_notifier,
        )),
    };

    let dashboard = DashboardUseCases {
        view: Arc::new(ViewDashboardService::new(
            event_query.clone(),
            category_query.clone(),
            user_query.clone(),
        )),
    };

    let state = AppState {
        auth,
        category,
        event,
        dashboard,
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::activate_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::request_password_reset_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::confirm_password_reset_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::list_users_handler);
    // Categories
    cfg.service(crate::category::adapter::incoming::web::routes::create_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::get_categories_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::update_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::delete_category_handler);
    // Events
    cfg.service(crate::event::adapter::incoming::web::routes::list_events_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::get_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::create_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::update_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::delete_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::rsvp_event_handler);
    // Dashboard
    cfg.service(crate::dashboard::adapter::incoming::web::routes::view_dashboard_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
