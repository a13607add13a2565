use async_trait::async_trait;

use crate::category::application::ports::outgoing::CategoryRecord;

//
// ──────────────────────────────────────────────────────────
// Category Command
// ──────────────────────────────────────────────────────────
//

/// Validated create/update payload. Update is full-replace, so both
/// operations share this command.
#[derive(Debug, Clone)]
pub struct CategoryCommand {
    name: String,
    description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CategoryCommandError {
    #[error("Category name cannot be empty")]
    EmptyName,

    #[error("Category name must be at most 100 characters")]
    NameTooLong,
}

impl CategoryCommand {
    pub fn new(name: String, description: Option<String>) -> Result<Self, CategoryCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CategoryCommandError::EmptyName);
        }

        if name.chars().count() > 100 {
            return Err(CategoryCommandError::NameTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            description: description.unwrap_or_default().trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, command: CategoryCommand)
        -> Result<CategoryRecord, CreateCategoryError>;
}
