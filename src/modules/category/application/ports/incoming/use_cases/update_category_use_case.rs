use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::CategoryRecord;

use super::create_category_use_case::CategoryCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Full replace of name and description.
#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        category_id: Uuid,
        command: CategoryCommand,
    ) -> Result<CategoryRecord, UpdateCategoryError>;
}
