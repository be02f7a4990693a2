use async_trait::async_trait;

use crate::models::Location;

/// Read-only repository for Locations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn get_all(&self) -> Vec<Location>;

    async fn get_by_id(&self, id: i32) -> Option<Location>;
}
