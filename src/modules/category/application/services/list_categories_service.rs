use async_trait::async_trait;

use crate::category::application::{
    ports::incoming::use_cases::{ListCategoriesError, ListCategoriesUseCase},
    ports::outgoing::{CategoryQuery, CategoryView},
};

#[derive(Debug, Clone)]
pub struct ListCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCategoriesUseCase for ListCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CategoryView>, ListCategoriesError> {
        self.query
            .list_categories()
            .await
            .map_err(|e| ListCategoriesError::QueryFailed(e.to_string()))
    }
}
