use actix_web::{delete, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::StaffUser,
    category::application::ports::incoming::use_cases::DeleteCategoryError,
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryDeleted {
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[delete("/api/categories/{category_id}")]
pub async fn delete_category_handler(
    _staff: StaffUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let category_id = path.into_inner();

    match data.category.delete.execute(category_id).await {
        Ok(()) => ApiResponse::success(CategoryDeleted {
            message: "Category deleted along with its events.".to_string(),
        }),
        Err(err) => map_delete_category_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_category_error(err: DeleteCategoryError) -> actix_web::HttpResponse {
    match err {
        DeleteCategoryError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        DeleteCategoryError::DatabaseError(_) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
