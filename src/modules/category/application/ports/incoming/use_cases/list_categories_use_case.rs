use async_trait::async_trait;

use crate::category::application::ports::outgoing::CategoryView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCategoriesError {
    #[error("Failed to fetch categories: {0}")]
    QueryFailed(String),
}

/// All categories with their event counts, name-ascending.
#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CategoryView>, ListCategoriesError>;
}
