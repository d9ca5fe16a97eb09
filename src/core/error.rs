use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;
use crate::shared::validation::FieldError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(FieldError::from_validation_errors(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error("Database error occurred")),
                )
                    .into_response()
            }
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::new("Validation failed", Some(errors))),
            )
                .into_response(),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ApiResponse::<()>::error(msg))).into_response()
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ApiResponse::<()>::error(msg))).into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
