use std::sync::Arc;

use axum::extract::State;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::categories::dtos::{
    CategoryRequestDto, CategoryResponseDto, ListCategoriesQuery,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, Page, ServiceResponse};
use crate::shared::validation::FieldError;

/// Create a category
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CategoryRequestDto,
    responses(
        (status = 201, description = "Category added successfully", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error", body = ApiResponse<Vec<FieldError>>),
        (status = 409, description = "Category already exists")
    ),
    tag = "categories"
)]
pub async fn add_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CategoryRequestDto>,
) -> Result<ServiceResponse<CategoryResponseDto>> {
    dto.validate()?;
    service.add_category(dto).await
}

/// Toggle a category between active and inactive
#[utoipa::path(
    patch,
    path = "/api/v1/categories/{id}/status",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Status toggled"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn toggle_category_status(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i64>,
) -> Result<ServiceResponse<()>> {
    service.toggle_category_status(id).await
}

/// Update name and description of an active category
#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = CategoryRequestDto,
    responses(
        (status = 200, description = "Category updated successfully", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error or inactive category", body = ApiResponse<Vec<FieldError>>),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category name already exists")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<CategoryRequestDto>,
) -> Result<ServiceResponse<CategoryResponseDto>> {
    dto.validate()?;
    service.update_category(id, dto).await
}

/// List categories with pagination and an optional status filter
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(ListCategoriesQuery),
    responses(
        (status = 200, description = "Categories fetched successfully", body = ApiResponse<Page<CategoryResponseDto>>),
        (status = 400, description = "Invalid paging parameters", body = ApiResponse<Vec<FieldError>>)
    ),
    tag = "categories"
)]
pub async fn get_categories(
    State(service): State<Arc<CategoryService>>,
    AppQuery(query): AppQuery<ListCategoriesQuery>,
) -> Result<ServiceResponse<Page<CategoryResponseDto>>> {
    query.validate()?;
    service
        .get_categories(query.status, query.page, query.size)
        .await
}

/// Get category by id
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category fetched successfully", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category_by_id(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i64>,
) -> Result<ServiceResponse<CategoryResponseDto>> {
    service.get_category_by_id(id).await
}
