use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::category::application::ports::outgoing::{
    CategoryData, CategoryRecord, CategoryRepository, CategoryRepositoryError,
};

use super::sea_orm_entity::{
    ActiveModel as CategoryActiveModel, Entity as CategoryEntity, Model as CategoryModel,
};

#[derive(Debug, Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn insert_category(
        &self,
        data: CategoryData,
    ) -> Result<CategoryRecord, CategoryRepositoryError> {
        let active = CategoryActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted: CategoryModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn update_category(
        &self,
        category_id: Uuid,
        data: CategoryData,
    ) -> Result<CategoryRecord, CategoryRepositoryError> {
        let active = CategoryActiveModel {
            id: Set(category_id),
            name: Set(data.name),
            description: Set(data.description),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let updated: CategoryModel = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => CategoryRepositoryError::CategoryNotFound,
            other => CategoryRepositoryError::DatabaseError(other.to_string()),
        })?;

        Ok(updated.to_record())
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError> {
        let result = CategoryEntity::delete_by_id(category_id)
            .exec(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(CategoryRepositoryError::CategoryNotFound);
        }

        Ok(())
    }
}
