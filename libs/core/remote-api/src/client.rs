//! HTTP client for the remote events API.

use std::sync::Arc;

use core_config::remote_api::RemoteApiConfig;
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::decode::{ListShape, decode_list, decode_one};
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::observer::{DecodeObserver, TracingObserver};
use crate::options::DecodeOptions;

/// Shared client used by every HTTP repository.
///
/// Cloning is cheap: the connection pool, decode options and observer are
/// all shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    options: Arc<DecodeOptions>,
    observer: Arc<dyn DecodeObserver>,
}

impl ApiClient {
    /// Client with default reqwest settings and the tracing observer.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Ok(Self {
            http: Client::new(),
            base_url: parse_base_url(base_url)?,
            options: Arc::new(DecodeOptions::default()),
            observer: Arc::new(TracingObserver),
        })
    }

    /// Build the client from configuration: timeouts, TLS relaxation and
    /// decode options.
    pub fn from_config(config: &RemoteApiConfig) -> ApiResult<Self> {
        if config.accept_invalid_certs {
            tracing::warn!(base_url = %config.base_url, "TLS certificate validation disabled for remote API");
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        let options = DecodeOptions {
            case_insensitive: config.case_insensitive,
            ..Default::default()
        };

        Ok(Self {
            http,
            base_url: parse_base_url(&config.base_url)?,
            options: Arc::new(options),
            observer: Arc::new(TracingObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn DecodeObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = Arc::new(options);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn observer(&self) -> &dyn DecodeObserver {
        self.observer.as_ref()
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// GET a collection. Never fails: transport errors, error statuses and
    /// unrecognized bodies all come back as an empty list.
    #[instrument(skip(self), fields(resource = endpoint.collection_key))]
    pub async fn get_list<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Vec<T> {
        let Some(body) = self.read(endpoint.collection_key, endpoint.path).await else {
            return Vec::new();
        };

        let shape = decode_list::<T>(&body, &self.options, Some(endpoint.collection_key));
        match &shape {
            ListShape::Unrecognized { reason } => {
                self.observer.decode_failed(endpoint.collection_key, reason);
            }
            ListShape::Paginated(page) => {
                tracing::debug!(
                    envelope = %page.envelope,
                    page = ?page.info.page,
                    total_count = ?page.info.total_count,
                    "Paginated wrapper detected"
                );
                self.observer
                    .shape_resolved(endpoint.collection_key, shape.kind(), shape.len());
            }
            _ => {
                self.observer
                    .shape_resolved(endpoint.collection_key, shape.kind(), shape.len());
            }
        }

        shape.into_items()
    }

    /// GET one entity. Empty bodies, error statuses, transport errors and
    /// undecodable bodies all yield `None`.
    #[instrument(skip(self), fields(resource = endpoint.entity))]
    pub async fn get_one<T: DeserializeOwned>(&self, endpoint: &Endpoint, id: i32) -> Option<T> {
        let body = self.read(endpoint.entity, &endpoint.item_path(id)).await?;
        if body.trim().is_empty() {
            tracing::debug!(id, "Empty body for single read");
            return None;
        }

        match decode_one::<T>(&body, &self.options) {
            Ok(entity) => Some(entity),
            Err(e) => {
                self.observer.decode_failed(endpoint.entity, &e.to_string());
                None
            }
        }
    }

    /// POST an entity to the collection and decode the created entity.
    #[instrument(skip(self, body), fields(resource = endpoint.entity))]
    pub async fn create<B, T>(&self, endpoint: &Endpoint, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.write(Method::POST, endpoint, endpoint.path, body, "create")
            .await
    }

    /// PUT an entity to its item path and decode the stored entity.
    #[instrument(skip(self, body), fields(resource = endpoint.entity))]
    pub async fn update<B, T>(&self, endpoint: &Endpoint, id: i32, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.write(Method::PUT, endpoint, &endpoint.item_path(id), body, "update")
            .await
    }

    /// DELETE an item. Any non-2xx status is `Ok(false)`; only transport
    /// failures are errors.
    #[instrument(skip(self), fields(resource = endpoint.entity))]
    pub async fn delete(&self, endpoint: &Endpoint, id: i32) -> ApiResult<bool> {
        let url = self.url(&endpoint.item_path(id))?;
        let response = self.http.delete(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::info!(id, status = %status, "Remote API refused delete");
        }
        Ok(status.is_success())
    }

    /// `resource` labels observer reports for this read.
    async fn read(&self, resource: &str, path: &str) -> Option<String> {
        let url = match self.url(path) {
            Ok(url) => url,
            Err(e) => {
                self.observer.request_failed(resource, &e.to_string());
                return None;
            }
        };

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                self.observer.request_failed(resource, &e.to_string());
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            self.observer
                .request_failed(resource, &format!("status {}", status));
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                self.observer.request_failed(resource, &e.to_string());
                None
            }
        }
    }

    async fn write<B, T>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        path: &str,
        body: &B,
        verb: &str,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        let response = self.http.request(method, url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Remote API rejected {}", verb);
            return Err(ApiError::Status { status, body });
        }

        let text = response.text().await?;
        decode_one::<T>(&text, &self.options).map_err(|e| {
            self.observer.decode_failed(endpoint.entity, &e.to_string());
            ApiError::Decode(format!("Failed to {} {}", verb, endpoint.entity))
        })
    }
}

fn parse_base_url(raw: &str) -> ApiResult<Url> {
    Url::parse(raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))
}
