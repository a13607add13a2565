use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::{
    incoming::use_cases::{CategoryCommand, UpdateCategoryError, UpdateCategoryUseCase},
    outgoing::{CategoryData, CategoryRecord, CategoryRepository, CategoryRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCategoryUseCase for UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        category_id: Uuid,
        command: CategoryCommand,
    ) -> Result<CategoryRecord, UpdateCategoryError> {
        let data = CategoryData {
            name: command.name().to_string(),
            description: command.description().to_string(),
        };

        self.repository
            .update_category(category_id, data)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryNotFound => UpdateCategoryError::CategoryNotFound,
                other => UpdateCategoryError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // ──────────────────────────────────────────────────────────
    // Mock Repository
    // ──────────────────────────────────────────────────────────

    #[derive(Debug, Clone)]
    struct MockCategoryRepository {
        result: Result<CategoryRecord, CategoryRepositoryError>,
    }

    impl MockCategoryRepository {
        fn success(record: CategoryRecord) -> Self {
            Self { result: Ok(record) }
        }

        fn not_found() -> Self {
            Self {
                result: Err(CategoryRepositoryError::CategoryNotFound),
            }
        }

        fn db_error(msg: &str) -> Self {
            Self {
                result: Err(CategoryRepositoryError::DatabaseError(msg.to_string())),
            }
        }
    }

    #[async_trait]
    impl CategoryRepository for MockCategoryRepository {
        async fn insert_category(
            &self,
            _data: CategoryData,
        ) -> Result<CategoryRecord, CategoryRepositoryError> {
            unimplemented!()
        }

        async fn update_category(
            &self,
            _category_id: Uuid,
            _data: CategoryData,
        ) -> Result<CategoryRecord, CategoryRepositoryError> {
            self.result.clone()
        }

        async fn delete_category(&self, _category_id: Uuid) -> Result<(), CategoryRepositoryError> {
            unimplemented!()
        }
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn update_category_success() {
        // Arrange
        let category_id = Uuid::new_v4();
        let command = CategoryCommand::new(
            "Tech".to_string(),
            Some("Meetups and conferences".to_string()),
        )
        .unwrap();

        let expected = CategoryRecord {
            id: category_id,
            name: "Tech".to_string(),
            description: "Meetups and conferences".to_string(),
        };

        let service = UpdateCategoryService::new(MockCategoryRepository::success(expected.clone()));

        // Act
        let result = service.execute(category_id, command).await;

        // Assert
        assert!(result.is_ok());
        let record = result.unwrap();
        assert_eq!(record.id, category_id);
        assert_eq!(record.name, "Tech");
    }

    #[tokio::test]
    async fn update_category_not_found() {
        // Arrange
        let command = CategoryCommand::new("Tech".to_string(), None).unwrap();
        let service = UpdateCategoryService::new(MockCategoryRepository::not_found());

        // Act
        let result = service.execute(Uuid::new_v4(), command).await;

        // Assert
        assert!(matches!(result, Err(UpdateCategoryError::CategoryNotFound)));
    }

    #[tokio::test]
    async fn update_category_repository_error_is_mapped() {
        // Arrange
        let command = CategoryCommand::new("Tech".to_string(), None).unwrap();
        let service = UpdateCategoryService::new(MockCategoryRepository::db_error("timeout"));

        // Act
        let result = service.execute(Uuid::new_v4(), command).await;

        // Assert
        match result {
            Err(UpdateCategoryError::RepositoryError(msg)) => assert!(msg.contains("timeout")),
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
