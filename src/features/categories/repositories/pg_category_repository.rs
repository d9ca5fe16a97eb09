use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::category_repository::{
    CategoryRepository, DUPLICATE_NAME_MESSAGE, STALE_VERSION_MESSAGE,
};

/// Convert database error to a more specific AppError
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation (PostgreSQL error code 23505)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            return AppError::Conflict(DUPLICATE_NAME_MESSAGE.to_string());
        }
    }

    AppError::Database(e)
}

/// Postgres-backed category store
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check category name: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, status, version, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by id: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description, status)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, status, version, created_at, updated_at
            "#,
        )
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.status)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn save(&self, category: &Category) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $1,
                description = $2,
                status = $3,
                version = version + 1,
                updated_at = NOW()
            WHERE id = $4 AND version = $5
            RETURNING id, name, description, status, version, created_at, updated_at
            "#,
        )
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.status)
        .bind(category.id)
        .bind(category.version)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?
        .ok_or_else(|| AppError::Conflict(STALE_VERSION_MESSAGE.to_string()))
    }

    async fn find_page(
        &self,
        status: Option<bool>,
        page: i64,
        size: i64,
    ) -> Result<(Vec<Category>, i64)> {
        // NULL status disables the filter
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM categories WHERE ($1::BOOLEAN IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count categories: {:?}", e);
            AppError::Database(e)
        })?;

        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, status, version, created_at, updated_at
            FROM categories
            WHERE ($1::BOOLEAN IS NULL OR status = $1)
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status)
        .bind(size)
        .bind(page.saturating_mul(size))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((categories, total))
    }
}
