mod create_category_service;
mod delete_category_service;
mod list_categories_service;
mod update_category_service;

pub use create_category_service::CreateCategoryService;
pub use delete_category_service::DeleteCategoryService;
pub use list_categories_service::ListCategoriesService;
pub use update_category_service::UpdateCategoryService;
