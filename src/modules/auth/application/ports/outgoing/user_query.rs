// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::role::Role;

/// Everything the credential flows need: login, activation, password
/// change and reset all read through this view.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub password_reset_jti: Option<String>,
    pub roles: Vec<Role>,
}

/// Read view served by `/api/users/me` and the staff user listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub profile_picture: String,
    pub is_active: bool,
    pub roles: Vec<Role>,
    pub date_joined: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, UserQueryError>;

    async fn credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CredentialRecord>, UserQueryError>;

    async fn credentials_by_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<CredentialRecord>, UserQueryError>;

    async fn profile_by_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<ProfileRecord>, UserQueryError>;

    /// All profiles, optionally narrowed to holders of one role,
    /// username-ascending.
    async fn list_profiles(
        &self,
        role: Option<Role>,
    ) -> Result<Vec<ProfileRecord>, UserQueryError>;

    async fn count_users(&self) -> Result<u64, UserQueryError>;
}
