use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope wrapped around every response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            message: message.into(),
            data: None,
        }
    }
}

/// Result of a service operation: the envelope plus the HTTP status it maps to.
///
/// Expected business outcomes (duplicates, inactive records, misses) are carried
/// here as ordinary values. Only unexpected faults travel as `AppError`.
#[derive(Debug)]
pub struct ServiceResponse<T> {
    pub status: StatusCode,
    pub body: ApiResponse<T>,
}

impl<T> ServiceResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, Some(data))
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, Some(data))
    }

    pub fn no_content() -> Self {
        Self::with_status(StatusCode::NO_CONTENT, String::new(), None)
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self::with_status(status, message, None)
    }

    fn with_status(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status,
            body: ApiResponse::new(message, data),
        }
    }

    #[allow(dead_code)]
    pub fn message(&self) -> &str {
        &self.body.message
    }

    #[allow(dead_code)]
    pub fn data(&self) -> Option<&T> {
        self.body.data.as_ref()
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }
        (self.status, Json(self.body)).into_response()
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// One zero-indexed page of results with its metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    /// Zero-based page index
    pub number: i64,
    pub size: i64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    /// `size` must be positive; the listing query is validated before reaching here.
    pub fn new(content: Vec<T>, total_elements: i64, number: i64, size: i64) -> Self {
        let size = size.max(1);
        let total_pages = total_elements.saturating_add(size - 1) / size;

        Self {
            number_of_elements: content.len(),
            content,
            total_elements,
            total_pages,
            number,
            size,
            first: number == 0,
            last: number.saturating_add(1) >= total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
        }
    }
}
