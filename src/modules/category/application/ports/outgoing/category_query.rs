use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Read view for the category listing and the event-form dropdowns.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub event_count: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// All categories name-ascending, each with its aggregated event count.
    async fn list_categories(&self) -> Result<Vec<CategoryView>, CategoryQueryError>;

    /// Total number of categories. Serves the staff dashboards.
    async fn count_categories(&self) -> Result<u64, CategoryQueryError>;
}
