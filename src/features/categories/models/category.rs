use chrono::{DateTime, Utc};
use sqlx::FromRow;
use validator::Validate;

use crate::shared::validation::{validate_not_blank, CATEGORY_NAME_REGEX};

/// Database model for category
///
/// `id`, `version` and the timestamps are assigned by the store; the service only
/// ever receives them back from `insert`/`save`.
#[derive(Debug, Clone, PartialEq, FromRow, Validate)]
pub struct Category {
    pub id: i64,

    #[validate(
        custom(function = "validate_not_blank", message = "Category name is required"),
        length(max = 100, message = "Category name must not exceed 100 characters"),
        regex(
            path = *CATEGORY_NAME_REGEX,
            message = "Category name can contain only letters and spaces"
        )
    )]
    pub name: String,

    #[validate(
        custom(function = "validate_not_blank", message = "Description is required"),
        length(max = 300, message = "Description must not exceed 300 characters")
    )]
    pub description: String,

    pub status: bool,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category that has not been stored yet
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewCategory {
    #[validate(
        custom(function = "validate_not_blank", message = "Category name is required"),
        length(max = 100, message = "Category name must not exceed 100 characters"),
        regex(
            path = *CATEGORY_NAME_REGEX,
            message = "Category name can contain only letters and spaces"
        )
    )]
    pub name: String,

    #[validate(
        custom(function = "validate_not_blank", message = "Description is required"),
        length(max = 300, message = "Description must not exceed 300 characters")
    )]
    pub description: String,

    pub status: bool,
}

impl NewCategory {
    /// New categories always start out active
    pub fn active(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status: true,
        }
    }
}
