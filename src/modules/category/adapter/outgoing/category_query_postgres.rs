use async_trait::async_trait;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::category::application::ports::outgoing::{
    CategoryQuery, CategoryQueryError, CategoryView,
};

use super::sea_orm_entity::Entity as CategoryEntity;

#[derive(Debug, Clone)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct CategoryCountRow {
    id: Uuid,
    name: String,
    description: String,
    event_count: i64,
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn list_categories(&self) -> Result<Vec<CategoryView>, CategoryQueryError> {
        let rows = CategoryCountRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Postgres,
            r#"SELECT c.id, c.name, c.description, COUNT(e.id) AS event_count
               FROM categories c
               LEFT JOIN events e ON e.category_id = c.id
               GROUP BY c.id, c.name, c.description
               ORDER BY c.name ASC"#,
        ))
        .all(&*self.db)
        .await
        .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryView {
                id: row.id,
                name: row.name,
                description: row.description,
                event_count: row.event_count,
            })
            .collect())
    }

    async fn count_categories(&self) -> Result<u64, CategoryQueryError> {
        CategoryEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))
    }
}
