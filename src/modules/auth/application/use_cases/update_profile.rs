use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::validate_phone_number;
use crate::auth::application::ports::outgoing::user_repository::ProfileChanges;
use crate::auth::application::ports::outgoing::{
    ProfileRecord, UserQuery, UserRepository, UserRepositoryError,
};

/// Partial update; absent fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("Last name cannot be empty")]
    EmptyLastName,

    #[error("Phone number must be 7-15 digits, optionally prefixed with +")]
    InvalidPhone,

    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(&self, input: UpdateProfileInput)
        -> Result<ProfileRecord, UpdateProfileError>;
}

/// Applies the changes, then re-reads the profile so the response carries
/// roles and join date alongside the updated fields.
#[derive(Clone)]
pub struct UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IUpdateProfileUseCase for UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: UpdateProfileInput,
    ) -> Result<ProfileRecord, UpdateProfileError> {
        let mut changes = ProfileChanges::default();

        if let Some(first_name) = input.first_name {
            let first_name = first_name.trim().to_string();
            if first_name.is_empty() {
                return Err(UpdateProfileError::EmptyFirstName);
            }
            changes.first_name = Some(first_name);
        }

        if let Some(last_name) = input.last_name {
            let last_name = last_name.trim().to_string();
            if last_name.is_empty() {
                return Err(UpdateProfileError::EmptyLastName);
            }
            changes.last_name = Some(last_name);
        }

        if let Some(phone) = input.phone_number {
            let phone = phone.trim().to_string();
            validate_phone_number(&phone).map_err(|_| UpdateProfileError::InvalidPhone)?;
            changes.phone_number = Some(phone);
        }

        if let Some(picture) = input.profile_picture {
            changes.profile_picture = Some(picture.trim().to_string());
        }

        self.repository
            .update_profile(input.user_id.into(), changes)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        self.query
            .profile_by_id(input.user_id.into())
            .await
            .map_err(|e| UpdateProfileError::QueryError(e.to_string()))?
            .ok_or(UpdateProfileError::UserNotFound)
    }
}
