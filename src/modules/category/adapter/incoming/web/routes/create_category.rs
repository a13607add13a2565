use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    auth::adapter::incoming::web::extractors::StaffUser,
    category::application::ports::incoming::use_cases::{
        CategoryCommand, CategoryCommandError, CreateCategoryError,
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
struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/categories")]
pub async fn create_category_handler(
    _staff: StaffUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateCategoryRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    // Validation happens in the command constructor
    let command = match CategoryCommand::new(payload.name, payload.description) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.category.create.execute(command).await {
        Ok(record) => ApiResponse::created(record),
        Err(err) => map_create_category_error(err),
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

fn map_create_category_error(err: CreateCategoryError) -> actix_web::HttpResponse {
    match err {
        CreateCategoryError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
