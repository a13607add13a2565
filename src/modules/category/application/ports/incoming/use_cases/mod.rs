mod create_category_use_case;
mod delete_category_use_case;
mod list_categories_use_case;
mod update_category_use_case;

pub use create_category_use_case::{
    CategoryCommand, CategoryCommandError, CreateCategoryError, CreateCategoryUseCase,
};
pub use delete_category_use_case::{DeleteCategoryError, DeleteCategoryUseCase};
pub use list_categories_use_case::{ListCategoriesError, ListCategoriesUseCase};
pub use update_category_use_case::{UpdateCategoryError, UpdateCategoryUseCase};
