//! Location Service

use std::sync::Arc;
use tracing::instrument;

use crate::models::Location;
use crate::repository::LocationRepository;

pub struct LocationService<R: LocationRepository> {
    repository: Arc<R>,
}

impl<R: LocationRepository> LocationService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all_locations(&self) -> Vec<Location> {
        self.repository.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_location_by_id(&self, id: i32) -> Option<Location> {
        self.repository.get_by_id(id).await
    }
}

impl<R: LocationRepository> Clone for LocationService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
