use async_trait::async_trait;

use crate::auth::application::domain::role::Role;
use crate::auth::application::ports::outgoing::{ProfileRecord, UserQuery};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    /// Profiles sorted by username, optionally narrowed to one role.
    async fn execute(&self, role: Option<Role>) -> Result<Vec<ProfileRecord>, ListUsersError>;
}

#[derive(Debug, Clone)]
pub struct ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListUsersUseCase for ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, role: Option<Role>) -> Result<Vec<ProfileRecord>, ListUsersError> {
        self.query
            .list_profiles(role)
            .await
            .map_err(|e| ListUsersError::QueryError(e.to_string()))
    }
}
