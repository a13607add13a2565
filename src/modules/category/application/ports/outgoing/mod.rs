mod category_query;
mod category_repository;

pub use category_query::{CategoryQuery, CategoryQueryError, CategoryView};
pub use category_repository::{
    CategoryData, CategoryRecord, CategoryRepository, CategoryRepositoryError,
};
