use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::category_repository::{
    CategoryRepository, DUPLICATE_NAME_MESSAGE, STALE_VERSION_MESSAGE,
};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Category>,
    next_id: i64,
}

impl Table {
    fn name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|c| c.name == name && Some(c.id) != except)
    }
}

/// In-process category store with the same guarantees as the Postgres table:
/// unique names, ids ascending from 1, version-checked saves.
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    table: RwLock<Table>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        Ok(self.table.read().await.name_taken(name, None))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category> {
        let mut table = self.table.write().await;
        if table.name_taken(&category.name, None) {
            return Err(AppError::Conflict(DUPLICATE_NAME_MESSAGE.to_string()));
        }

        table.next_id += 1;
        let now = Utc::now();
        let stored = Category {
            id: table.next_id,
            name: category.name.clone(),
            description: category.description.clone(),
            status: category.status,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, category: &Category) -> Result<Category> {
        let mut table = self.table.write().await;
        if table.name_taken(&category.name, Some(category.id)) {
            return Err(AppError::Conflict(DUPLICATE_NAME_MESSAGE.to_string()));
        }

        let current = table
            .rows
            .get_mut(&category.id)
            .filter(|c| c.version == category.version)
            .ok_or_else(|| AppError::Conflict(STALE_VERSION_MESSAGE.to_string()))?;

        current.name = category.name.clone();
        current.description = category.description.clone();
        current.status = category.status;
        current.version += 1;
        current.updated_at = Utc::now();
        Ok(current.clone())
    }

    async fn find_page(
        &self,
        status: Option<bool>,
        page: i64,
        size: i64,
    ) -> Result<(Vec<Category>, i64)> {
        let table = self.table.read().await;
        let matching: Vec<&Category> = table
            .rows
            .values()
            .filter(|c| status.is_none_or(|s| c.status == s))
            .collect();

        let total = matching.len() as i64;
        let skip = usize::try_from(page.saturating_mul(size)).unwrap_or(usize::MAX);
        let take = usize::try_from(size).unwrap_or(0);
        let items = matching.into_iter().skip(skip).take(take).cloned().collect();

        Ok((items, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_ascending_ids() {
        let repo = InMemoryCategoryRepository::new();
        let a = repo.insert(&NewCategory::active("Books", "Reading")).await.unwrap();
        let b = repo.insert(&NewCategory::active("Toys", "Playing")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.version, 1);
        assert!(repo.exists_by_name("Books").await.unwrap());
        assert!(!repo.exists_by_name("books").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_a_conflict() {
        let repo = InMemoryCategoryRepository::new();
        repo.insert(&NewCategory::active("Books", "Reading")).await.unwrap();

        let err = repo
            .insert(&NewCategory::active("Books", "Again"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_bumps_version_and_rejects_stale_copies() {
        let repo = InMemoryCategoryRepository::new();
        let original = repo.insert(&NewCategory::active("Books", "Reading")).await.unwrap();

        let mut first = original.clone();
        first.status = false;
        let saved = repo.save(&first).await.unwrap();
        assert_eq!(saved.version, 2);
        assert!(!saved.status);

        let mut stale = original;
        stale.description = "Lost update".to_string();
        let err = repo.save(&stale).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref m) if m == STALE_VERSION_MESSAGE));
    }

    #[tokio::test]
    async fn test_find_page_filters_and_pages_by_id() {
        let repo = InMemoryCategoryRepository::new();
        for name in ["Alpha", "Beta", "Gamma", "Delta"] {
            repo.insert(&NewCategory::active(name, "Letters")).await.unwrap();
        }
        let mut beta = repo.find_by_id(2).await.unwrap().unwrap();
        beta.status = false;
        repo.save(&beta).await.unwrap();

        let (all, total) = repo.find_page(None, 0, 3).await.unwrap();
        assert_eq!(total, 4);
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let (second, _) = repo.find_page(None, 1, 3).await.unwrap();
        assert_eq!(second.iter().map(|c| c.id).collect::<Vec<_>>(), vec![4]);

        let (active, active_total) = repo.find_page(Some(true), 0, 10).await.unwrap();
        assert_eq!(active_total, 3);
        assert!(active.iter().all(|c| c.status));

        let (inactive, _) = repo.find_page(Some(false), 0, 10).await.unwrap();
        assert_eq!(inactive.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
    }
}
