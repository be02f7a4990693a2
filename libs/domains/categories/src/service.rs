//! Category Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CategoryDto};
use crate::repository::CategoryRepository;

/// Category service providing business logic operations
///
/// Validates DTOs before anything reaches the repository and requires a
/// category to exist before it is updated.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all_categories(&self) -> Vec<Category> {
        self.repository.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_category_by_id(&self, id: i32) -> Option<Category> {
        self.repository.get_by_id(id).await
    }

    /// Validate the DTO and create a new category remotely
    #[instrument(skip(self, dto), fields(category_name = %dto.name))]
    pub async fn create_category(&self, dto: CategoryDto) -> CategoryResult<Category> {
        dto.validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        self.repository.create(Category::from(dto)).await
    }

    /// Validate the DTO, load the existing category and overwrite its fields
    #[instrument(skip(self, dto))]
    pub async fn update_category(&self, id: i32, dto: CategoryDto) -> CategoryResult<Category> {
        dto.validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        let mut existing = self
            .repository
            .get_by_id(id)
            .await
            .ok_or(CategoryError::NotFound(id))?;

        existing.apply(dto);
        self.repository.update(existing).await
    }

    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i32) -> CategoryResult<bool> {
        self.repository.delete(id).await
    }
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;
    use mockall::predicate::eq;
    use remote_api::ApiError;

    fn dto(name: &str) -> CategoryDto {
        CategoryDto {
            name: name.to_string(),
            description: "Live shows".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_maps_dto_to_new_entity() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_create()
            .withf(|c| c.id == 0 && c.name == "Music" && c.description == "Live shows")
            .times(1)
            .returning(|c| Ok(Category { id: 11, ..c }));

        let service = CategoryService::new(mock_repo);
        let created = service.create_category(dto("Music")).await.unwrap();

        assert_eq!(created.id, 11);
        assert_eq!(created.name, "Music");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name_before_any_call() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_create().never();

        let service = CategoryService::new(mock_repo);
        let result = service.create_category(dto("")).await;

        match result {
            Err(CategoryError::Validation(msg)) => {
                assert!(msg.contains("Category name is required"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_missing_category_issues_no_write() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(42))
            .returning(|_| None);
        mock_repo.expect_update().never();

        let service = CategoryService::new(mock_repo);
        let result = service.update_category(42, dto("Music")).await;

        assert!(matches!(result, Err(CategoryError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_update_overwrites_name_and_description() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_get_by_id().with(eq(5)).returning(|id| {
            Some(Category {
                id,
                name: "Old".to_string(),
                description: "Old description".to_string(),
            })
        });
        mock_repo
            .expect_update()
            .withf(|c| c.id == 5 && c.name == "Music" && c.description == "Live shows")
            .returning(Ok);

        let service = CategoryService::new(mock_repo);
        let updated = service.update_category(5, dto("Music")).await.unwrap();

        assert_eq!(updated.id, 5);
        assert_eq!(updated.description, "Live shows");
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let service = CategoryService::new(mock_repo);
        let result = service.update_category(5, dto(&"x".repeat(101))).await;

        assert!(matches!(result, Err(CategoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_passes_remote_outcome_through() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_delete().with(eq(1)).returning(|_| Ok(true));
        mock_repo.expect_delete().with(eq(2)).returning(|_| Ok(false));

        let service = CategoryService::new(mock_repo);
        assert!(service.delete_category(1).await.unwrap());
        assert!(!service.delete_category(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_surfaces_remote_failure() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(ApiError::Decode("Failed to create category".into()).into()));

        let service = CategoryService::new(mock_repo);
        let err = service.create_category(dto("Music")).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to create category");
    }
}
