use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::role::Role;

//
// ──────────────────────────────────────────────────────────
// Write-side DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial profile update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub profile_picture: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Activation is idempotent; the caller needs to know which case happened
/// to phrase its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    Activated,
    AlreadyActive,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username is already taken")]
    DuplicateUsername,

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the account row. Uniqueness is left to the database; unique
    /// violations surface as the `Duplicate*` variants.
    async fn create_account(&self, data: NewAccount) -> Result<UserRecord, UserRepositoryError>;

    async fn assign_role(&self, user_id: UserId, role: Role) -> Result<(), UserRepositoryError>;

    async fn activate(&self, user_id: UserId) -> Result<ActivationOutcome, UserRepositoryError>;

    /// Stores the new hash and clears any outstanding password-reset marker.
    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    /// Records the `jti` of the latest reset token; overwrites any previous
    /// marker so only the newest link stays valid.
    async fn set_password_reset_marker(
        &self,
        user_id: UserId,
        jti: String,
    ) -> Result<(), UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<UserRecord, UserRepositoryError>;
}
