use actix_web::{get, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::StaffUser,
    category::application::ports::incoming::use_cases::ListCategoriesError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/categories")]
pub async fn get_categories_handler(
    _staff: StaffUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.category.list.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(err) => map_list_categories_error(err),
    }
}

fn map_list_categories_error(err: ListCategoriesError) -> actix_web::HttpResponse {
    match err {
        ListCategoriesError::QueryFailed(_) => ApiResponse::internal_error(),
    }
}
