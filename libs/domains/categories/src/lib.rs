//! Categories Domain
//!
//! Event categories stored by the remote events API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, existence checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + remote API implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  ApiClient  │  ← remote_api
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_categories::{handlers, CategoryService, HttpCategoryRepository};
//! use remote_api::ApiClient;
//!
//! # fn main() -> Result<(), remote_api::ApiError> {
//! let client = ApiClient::new("https://localhost:5003")?;
//! let service = CategoryService::new(HttpCategoryRepository::new(client));
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod http;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{CategoryError, CategoryResult};
pub use http::{CATEGORIES, HttpCategoryRepository};
pub use models::{Category, CategoryDto};
pub use repository::CategoryRepository;
pub use service::CategoryService;
