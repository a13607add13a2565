use std::sync::Arc;

use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, DeleteCategoryUseCase, ListCategoriesUseCase, UpdateCategoryUseCase,
};

#[derive(Clone)]
pub struct CategoryUseCases {
    pub create: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub list: Arc<dyn ListCategoriesUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCategoryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
}
