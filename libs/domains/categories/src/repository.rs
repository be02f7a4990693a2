use async_trait::async_trait;

use crate::error::CategoryResult;
use crate::models::Category;

/// Repository trait for Category access
///
/// Reads never fail: an unreachable API, an error status or an unreadable
/// body all come back as an empty list or `None`. Writes surface errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories
    async fn get_all(&self) -> Vec<Category>;

    /// A category by ID
    async fn get_by_id(&self, id: i32) -> Option<Category>;

    /// Create a category; returns it with its server-assigned ID
    async fn create(&self, category: Category) -> CategoryResult<Category>;

    /// Replace the category stored under `category.id`
    async fn update(&self, category: Category) -> CategoryResult<Category>;

    /// Delete a category; `false` when the API refused
    async fn delete(&self, id: i32) -> CategoryResult<bool>;
}
