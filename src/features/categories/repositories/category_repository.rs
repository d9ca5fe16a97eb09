use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::{Category, NewCategory};

/// Persistence port for the category table
///
/// Adapters assign `id`, `version` and the audit timestamps. `save` is
/// conditional on the caller's `version` still matching the stored row and fails
/// with `AppError::Conflict` otherwise, which keeps read-check-write sequences in
/// the service free of lost updates.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Case-sensitive exact match on the name
    async fn exists_by_name(&self, name: &str) -> Result<bool>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>>;

    async fn insert(&self, category: &NewCategory) -> Result<Category>;

    async fn save(&self, category: &Category) -> Result<Category>;

    /// One zero-indexed page ordered by id, plus the total number of matches.
    /// `status = None` returns every category.
    async fn find_page(
        &self,
        status: Option<bool>,
        page: i64,
        size: i64,
    ) -> Result<(Vec<Category>, i64)>;
}

pub const DUPLICATE_NAME_MESSAGE: &str = "Category already exists";

pub const STALE_VERSION_MESSAGE: &str = "Category was modified concurrently, please retry";
