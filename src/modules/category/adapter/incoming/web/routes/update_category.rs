use actix_web::{put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::StaffUser,
    category::application::ports::incoming::use_cases::{
        CategoryCommand, CategoryCommandError, UpdateCategoryError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct UpdateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[put("/api/categories/{category_id}")]
pub async fn update_category_handler(
    _staff: StaffUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateCategoryRequest>,
) -> impl Responder {
    let category_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match CategoryCommand::new(payload.name, payload.description) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.category.update.execute(category_id, command).await {
        Ok(record) => ApiResponse::success(record),
        Err(err) => map_update_category_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CategoryCommandError) -> actix_web::HttpResponse {
    match err {
        CategoryCommandError::EmptyName => {
            ApiResponse::bad_request("CATEGORY_NAME_REQUIRED", "Category name cannot be empty")
        }
        CategoryCommandError::NameTooLong => ApiResponse::bad_request(
            "CATEGORY_NAME_TOO_LONG",
            "Category name must not exceed 100 characters",
        ),
    }
}

fn map_update_category_error(err: UpdateCategoryError) -> actix_web::HttpResponse {
    match err {
        UpdateCategoryError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        UpdateCategoryError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
