use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/v1/categories",
            get(handlers::get_categories).post(handlers::add_category),
        )
        .route(
            "/api/v1/categories/{id}",
            get(handlers::get_category_by_id).put(handlers::update_category),
        )
        .route(
            "/api/v1/categories/{id}/status",
            patch(handlers::toggle_category_status),
        )
        .with_state(service)
}
