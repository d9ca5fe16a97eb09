//! Category management for the e-commerce catalog.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/v1/categories` | Create a category (starts active) |
//! | GET | `/api/v1/categories?status=&page=&size=` | Paged listing, optional status filter |
//! | GET | `/api/v1/categories/{id}` | Get category by id |
//! | PUT | `/api/v1/categories/{id}` | Update name and description (active only) |
//! | PATCH | `/api/v1/categories/{id}/status` | Toggle active/inactive |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCategoryRepository;
pub use services::CategoryService;
