use std::sync::Arc;

use axum::http::StatusCode;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryRequestDto, CategoryResponseDto};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::category_repository::DUPLICATE_NAME_MESSAGE;
use crate::features::categories::repositories::CategoryRepository;
use crate::shared::types::{Page, ServiceResponse};
use crate::shared::validation::FieldError;

const NOT_FOUND: &str = "Category not found";
const ALREADY_EXISTS: &str = "Category already exists";
const NAME_TAKEN: &str = "Category name already exists";
const INACTIVE: &str = "Inactive category cannot be updated";

/// Service for category operations
///
/// Every operation yields a `ServiceResponse`: duplicates, inactive records and
/// misses are ordinary outcomes with their own status code. `Err` is reserved for
/// storage faults and for data that fails the model's write-time validation.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Create a new, active category
    pub async fn add_category(
        &self,
        dto: CategoryRequestDto,
    ) -> Result<ServiceResponse<CategoryResponseDto>> {
        if self.repository.exists_by_name(&dto.category_name).await? {
            return Ok(ServiceResponse::failure(StatusCode::CONFLICT, ALREADY_EXISTS));
        }

        let category = NewCategory::active(dto.category_name, dto.description);
        check_model(&category)?;

        match self.repository.insert(&category).await {
            Ok(saved) => {
                tracing::info!("Category {} created (id={})", saved.name, saved.id);
                Ok(ServiceResponse::created(
                    "Category added successfully",
                    saved.into(),
                ))
            }
            // Another writer inserted the same name after the existence check
            Err(AppError::Conflict(msg)) if msg == DUPLICATE_NAME_MESSAGE => {
                Ok(ServiceResponse::failure(StatusCode::CONFLICT, ALREADY_EXISTS))
            }
            Err(e) => Err(e),
        }
    }

    /// Flip a category between active and inactive
    pub async fn toggle_category_status(&self, id: i64) -> Result<ServiceResponse<()>> {
        let Some(mut category) = self.repository.find_by_id(id).await? else {
            return Ok(ServiceResponse::failure(StatusCode::NOT_FOUND, NOT_FOUND));
        };

        category.status = !category.status;
        let saved = self.persist(&category).await?;
        tracing::info!("Category {} status set to {}", saved.id, saved.status);

        Ok(ServiceResponse::no_content())
    }

    /// Rename / re-describe an active category
    pub async fn update_category(
        &self,
        id: i64,
        dto: CategoryRequestDto,
    ) -> Result<ServiceResponse<CategoryResponseDto>> {
        let Some(mut category) = self.repository.find_by_id(id).await? else {
            return Ok(ServiceResponse::failure(StatusCode::NOT_FOUND, NOT_FOUND));
        };

        // Inactive categories only change through the status toggle
        if !category.status {
            return Ok(ServiceResponse::failure(StatusCode::BAD_REQUEST, INACTIVE));
        }

        if category.name != dto.category_name
            && self.repository.exists_by_name(&dto.category_name).await?
        {
            return Ok(ServiceResponse::failure(StatusCode::CONFLICT, NAME_TAKEN));
        }

        category.name = dto.category_name;
        category.description = dto.description;

        match self.persist(&category).await {
            Ok(saved) => Ok(ServiceResponse::ok(
                "Category updated successfully",
                saved.into(),
            )),
            // A concurrent writer claimed the name between the check and the save
            Err(AppError::Conflict(msg)) if msg == DUPLICATE_NAME_MESSAGE => {
                Ok(ServiceResponse::failure(StatusCode::CONFLICT, NAME_TAKEN))
            }
            Err(e) => Err(e),
        }
    }

    /// List categories page by page, optionally filtered by status
    pub async fn get_categories(
        &self,
        status: Option<bool>,
        page: i64,
        size: i64,
    ) -> Result<ServiceResponse<Page<CategoryResponseDto>>> {
        let (categories, total) = self.repository.find_page(status, page, size).await?;

        let page = Page::new(categories, total, page, size).map(CategoryResponseDto::from);
        Ok(ServiceResponse::ok("Categories fetched successfully", page))
    }

    /// Get category by id
    pub async fn get_category_by_id(
        &self,
        id: i64,
    ) -> Result<ServiceResponse<CategoryResponseDto>> {
        match self.repository.find_by_id(id).await? {
            Some(category) => Ok(ServiceResponse::ok(
                "Category fetched successfully",
                category.into(),
            )),
            None => Ok(ServiceResponse::failure(StatusCode::NOT_FOUND, NOT_FOUND)),
        }
    }

    async fn persist(&self, category: &Category) -> Result<Category> {
        check_model(category)?;
        self.repository.save(category).await
    }
}

/// Write-time validation, with field names reported as the request spells them
fn check_model<T: Validate>(model: &T) -> Result<()> {
    model.validate().map_err(|errors| {
        let fields = FieldError::from_validation_errors(&errors)
            .into_iter()
            .map(|mut error| {
                if error.field == "name" {
                    error.field = "categoryName".to_string();
                }
                error
            })
            .collect();
        AppError::Validation(fields)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::repositories::InMemoryCategoryRepository;
    use async_trait::async_trait;

    fn request(name: &str, description: &str) -> CategoryRequestDto {
        CategoryRequestDto {
            category_name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn service() -> (CategoryService, Arc<InMemoryCategoryRepository>) {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        (CategoryService::new(repo.clone()), repo)
    }

    async fn add(service: &CategoryService, name: &str) -> CategoryResponseDto {
        service
            .add_category(request(name, "Some description"))
            .await
            .unwrap()
            .body
            .data
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_category_is_active_with_fresh_id() {
        let (service, _) = service();

        let response = service
            .add_category(request("Electronics", "Devices and gadgets"))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.message(), "Category added successfully");
        let data = response.data().unwrap();
        assert_eq!(data.category_id, 1);
        assert_eq!(data.category_name, "Electronics");
        assert!(data.status);
    }

    #[tokio::test]
    async fn test_add_duplicate_name_is_conflict_and_store_unchanged() {
        let (service, repo) = service();
        add(&service, "Electronics").await;

        let response = service
            .add_category(request("Electronics", "Other"))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.message(), "Category already exists");
        assert!(response.data().is_none());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_check_is_case_sensitive() {
        let (service, _) = service();
        add(&service, "Electronics").await;

        let response = service
            .add_category(request("electronics", "Lowercase"))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_add_rejects_names_outside_the_model_charset() {
        let (service, repo) = service();

        let err = service
            .add_category(request("Books 2", "Sequels"))
            .await
            .unwrap_err();

        match err {
            AppError::Validation(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "categoryName");
                assert_eq!(
                    fields[0].message,
                    "Category name can contain only letters and spaces"
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_update_reports_model_errors_under_request_field_names() {
        let (service, _) = service();
        let books = add(&service, "Books").await;

        let err = service
            .update_category(books.category_id, request("Books & More", "Renamed"))
            .await
            .unwrap_err();

        match err {
            AppError::Validation(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "categoryName");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_status() {
        let (service, repo) = service();
        let created = add(&service, "Books").await;

        let first = service
            .toggle_category_status(created.category_id)
            .await
            .unwrap();
        assert_eq!(first.status, StatusCode::NO_CONTENT);
        let stored = repo.find_by_id(created.category_id).await.unwrap().unwrap();
        assert!(!stored.status);

        service
            .toggle_category_status(created.category_id)
            .await
            .unwrap();
        let stored = repo.find_by_id(created.category_id).await.unwrap().unwrap();
        assert!(stored.status);
        assert_eq!(stored.version, 3);
    }

    #[tokio::test]
    async fn test_toggle_missing_category_is_not_found() {
        let (service, _) = service();

        let response = service.toggle_category_status(42).await.unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.message(), "Category not found");
    }

    #[tokio::test]
    async fn test_update_inactive_category_is_rejected_regardless_of_payload() {
        let (service, _) = service();
        let created = add(&service, "Books").await;
        service
            .toggle_category_status(created.category_id)
            .await
            .unwrap();

        for payload in [request("Novels", "Fiction"), request("", ""), request("Books", "x")] {
            let response = service
                .update_category(created.category_id, payload)
                .await
                .unwrap();
            assert_eq!(response.status, StatusCode::BAD_REQUEST);
            assert_eq!(response.message(), "Inactive category cannot be updated");
        }
    }

    #[tokio::test]
    async fn test_update_to_another_categorys_name_is_conflict() {
        let (service, _) = service();
        add(&service, "Books").await;
        let toys = add(&service, "Toys").await;

        let response = service
            .update_category(toys.category_id, request("Books", "Stolen name"))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.message(), "Category name already exists");
    }

    #[tokio::test]
    async fn test_update_keeping_own_name_succeeds() {
        let (service, _) = service();
        let books = add(&service, "Books").await;

        let response = service
            .update_category(books.category_id, request("Books", "New description"))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.message(), "Category updated successfully");
        let data = response.data().unwrap();
        assert_eq!(data.category_name, "Books");
        assert_eq!(data.description, "New description");
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let (service, _) = service();

        let response = service
            .update_category(9, request("Books", "Nothing"))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_categories_filters_by_status() {
        let (service, _) = service();
        add(&service, "Alpha").await;
        let beta = add(&service, "Beta").await;
        add(&service, "Gamma").await;
        service
            .toggle_category_status(beta.category_id)
            .await
            .unwrap();

        let all = service.get_categories(None, 0, 10).await.unwrap();
        assert_eq!(all.status, StatusCode::OK);
        assert_eq!(all.message(), "Categories fetched successfully");
        let page = all.data().unwrap();
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.content.len(), 3);

        let active = service.get_categories(Some(true), 0, 10).await.unwrap();
        let page = active.data().unwrap();
        assert_eq!(page.total_elements, 2);
        assert!(page.content.iter().all(|c| c.status));
    }

    #[tokio::test]
    async fn test_get_categories_page_metadata() {
        let (service, _) = service();
        for name in ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"] {
            add(&service, name).await;
        }

        let response = service.get_categories(None, 1, 2).await.unwrap();
        let page = response.data().unwrap();
        assert_eq!(page.number, 1);
        assert_eq!(page.size, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(
            page.content
                .iter()
                .map(|c| c.category_name.as_str())
                .collect::<Vec<_>>(),
            vec!["Gamma", "Delta"]
        );
    }

    #[tokio::test]
    async fn test_get_missing_category_is_not_found_with_null_data() {
        let (service, _) = service();

        let response = service.get_category_by_id(404).await.unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.message(), "Category not found");
        assert!(response.data().is_none());
    }

    #[tokio::test]
    async fn test_electronics_lifecycle() {
        let (service, _) = service();

        let created = service
            .add_category(request("Electronics", "Devices and gadgets"))
            .await
            .unwrap();
        assert_eq!(created.status, StatusCode::CREATED);
        let id = created.data().unwrap().category_id;

        let again = service
            .add_category(request("Electronics", "Devices and gadgets"))
            .await
            .unwrap();
        assert_eq!(again.status, StatusCode::CONFLICT);
        assert_eq!(again.message(), "Category already exists");

        let toggled = service.toggle_category_status(id).await.unwrap();
        assert_eq!(toggled.status, StatusCode::NO_CONTENT);

        let fetched = service.get_category_by_id(id).await.unwrap();
        assert!(!fetched.data().unwrap().status);

        let updated = service
            .update_category(id, request("Gadgets", "Renamed"))
            .await
            .unwrap();
        assert_eq!(updated.status, StatusCode::BAD_REQUEST);
        assert_eq!(updated.message(), "Inactive category cannot be updated");
    }

    /// Reports every name as free, so the store's unique constraint is the
    /// only thing standing between two writers.
    struct RacingRepository(InMemoryCategoryRepository);

    #[async_trait]
    impl CategoryRepository for RacingRepository {
        async fn exists_by_name(&self, _name: &str) -> Result<bool> {
            Ok(false)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
            self.0.find_by_id(id).await
        }

        async fn insert(&self, category: &NewCategory) -> Result<Category> {
            self.0.insert(category).await
        }

        async fn save(&self, category: &Category) -> Result<Category> {
            self.0.save(category).await
        }

        async fn find_page(
            &self,
            status: Option<bool>,
            page: i64,
            size: i64,
        ) -> Result<(Vec<Category>, i64)> {
            self.0.find_page(status, page, size).await
        }
    }

    #[tokio::test]
    async fn test_racing_duplicates_still_surface_as_conflicts() {
        let service = CategoryService::new(Arc::new(RacingRepository(
            InMemoryCategoryRepository::new(),
        )));
        add(&service, "Books").await;
        let toys = add(&service, "Toys").await;

        let response = service
            .add_category(request("Books", "Racing insert"))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.message(), "Category already exists");
        assert!(response.data().is_none());

        let response = service
            .update_category(toys.category_id, request("Books", "Racing rename"))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.message(), "Category name already exists");
    }
}
