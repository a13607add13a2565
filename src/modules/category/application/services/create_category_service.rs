use async_trait::async_trait;

use crate::category::application::ports::{
    incoming::use_cases::{CategoryCommand, CreateCategoryError, CreateCategoryUseCase},
    outgoing::{CategoryData, CategoryRecord, CategoryRepository},
};

#[derive(Debug, Clone)]
pub struct CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CategoryCommand,
    ) -> Result<CategoryRecord, CreateCategoryError> {
        let data = CategoryData {
            name: command.name().to_string(),
            description: command.description().to_string(),
        };

        self.repository
            .insert_category(data)
            .await
            .map_err(|e| CreateCategoryError::RepositoryError(e.to_string()))
    }
}
