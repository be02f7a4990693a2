//! Remote API implementation of [`CategoryRepository`]

use async_trait::async_trait;
use remote_api::{ApiClient, Endpoint};
use tracing::instrument;

use crate::error::CategoryResult;
use crate::models::Category;
use crate::repository::CategoryRepository;

pub const CATEGORIES: Endpoint = Endpoint::new("/api/v1/Categories", "category", "categories");

#[derive(Clone)]
pub struct HttpCategoryRepository {
    client: ApiClient,
}

impl HttpCategoryRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryRepository for HttpCategoryRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Vec<Category> {
        self.client.get_list(&CATEGORIES).await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> Option<Category> {
        self.client.get_one(&CATEGORIES, id).await
    }

    #[instrument(skip(self, category), fields(category_name = %category.name))]
    async fn create(&self, category: Category) -> CategoryResult<Category> {
        Ok(self.client.create(&CATEGORIES, &category).await?)
    }

    #[instrument(skip(self, category), fields(category_id = category.id))]
    async fn update(&self, category: Category) -> CategoryResult<Category> {
        Ok(self.client.update(&CATEGORIES, category.id, &category).await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> CategoryResult<bool> {
        Ok(self.client.delete(&CATEGORIES, id).await?)
    }
}
