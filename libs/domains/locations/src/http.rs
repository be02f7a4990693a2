//! Remote API implementation of [`LocationRepository`]

use async_trait::async_trait;
use remote_api::{ApiClient, Endpoint};
use tracing::instrument;

use crate::models::Location;
use crate::repository::LocationRepository;

pub const LOCATIONS: Endpoint = Endpoint::new("/api/v1/Locations", "location", "locations");

#[derive(Clone)]
pub struct HttpLocationRepository {
    client: ApiClient,
}

impl HttpLocationRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LocationRepository for HttpLocationRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Vec<Location> {
        self.client.get_list(&LOCATIONS).await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> Option<Location> {
        self.client.get_one(&LOCATIONS, id).await
    }
}
