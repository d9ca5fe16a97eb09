use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::shared::types::{ApiResponse, Page};
use crate::shared::validation::FieldError;

#[derive(OpenApi)]
#[openapi(
    paths(
        categories_handlers::add_category,
        categories_handlers::toggle_category_status,
        categories_handlers::update_category,
        categories_handlers::get_categories,
        categories_handlers::get_category_by_id,
    ),
    components(
        schemas(
            // Shared
            FieldError,
            ApiResponse<Vec<FieldError>>,
            // Categories
            categories_dtos::CategoryRequestDto,
            categories_dtos::CategoryResponseDto,
            Page<categories_dtos::CategoryResponseDto>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Page<categories_dtos::CategoryResponseDto>>,
        )
    ),
    tags(
        (name = "categories", description = "Catalog category management"),
    ),
    info(
        title = "Catalog Categories API",
        version = "0.1.0",
        description = "Category management for the e-commerce catalog",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
