use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::validation::validate_not_blank;

/// Request DTO for creating or updating a category
///
/// Missing fields deserialize as empty strings so they are reported as blank.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequestDto {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "Category name is required"),
        length(max = 100, message = "Category name must not exceed 100 characters")
    )]
    pub category_name: String,

    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "Description is required"),
        length(max = 300, message = "Description must not exceed 300 characters")
    )]
    pub description: String,
}

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub category_id: i64,
    pub category_name: String,
    pub description: String,
    pub status: bool,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            category_id: c.id,
            category_name: c.name,
            description: c.description,
            status: c.status,
        }
    }
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Query params for listing categories
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct ListCategoriesQuery {
    /// Filter by status (true = active, false = inactive, none = all)
    pub status: Option<bool>,

    /// Page number (0-indexed, default: 0)
    #[serde(default)]
    #[param(minimum = 0, maximum = 2147483647)]
    #[validate(range(
        min = 0,
        max = 2147483647,
        message = "Page index must be between 0 and 2147483647"
    ))]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub size: i64,
}

impl Default for ListCategoriesQuery {
    fn default() -> Self {
        Self {
            status: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}
