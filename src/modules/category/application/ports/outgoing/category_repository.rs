use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CategoryData {
    pub name: String,
    pub description: String,
}

/// Write-side view of a category row.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Category not found")]
    CategoryNotFound,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert_category(
        &self,
        data: CategoryData,
    ) -> Result<CategoryRecord, CategoryRepositoryError>;

    async fn update_category(
        &self,
        category_id: Uuid,
        data: CategoryData,
    ) -> Result<CategoryRecord, CategoryRepositoryError>;

    /// Cascades to the category's events at the database level.
    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError>;
}
