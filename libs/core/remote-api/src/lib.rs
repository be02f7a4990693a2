//! Remote API access layer
//!
//! Every domain repository talks to the remote events API through the same
//! [`ApiClient`]. The client owns transport concerns (base URL, timeouts,
//! TLS) and response decoding, so repositories only name their endpoint and
//! entity type.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  HttpCategoryRepository / HttpEventRepo... │
//! └────────────────────┬───────────────────────┘
//!                      │ Endpoint + T
//! ┌────────────────────▼───────────────────────┐
//! │  ApiClient                                 │
//! │  reads degrade to [] / None                │
//! │  writes surface ApiError                   │
//! └──────────┬─────────────────────┬───────────┘
//!            │                     │
//! ┌──────────▼──────────┐ ┌────────▼───────────┐
//! │ decode (strategies) │ │ DecodeObserver     │
//! │ Envelope→Array→     │ │ tracing / recorder │
//! │ Single              │ └────────────────────┘
//! └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use remote_api::{ApiClient, Endpoint};
//!
//! const CATEGORIES: Endpoint = Endpoint::new("/api/v1/Categories", "category", "categories");
//!
//! let client = ApiClient::from_config(&config)?;
//! let categories: Vec<Category> = client.get_list(&CATEGORIES).await;
//! ```

pub mod client;
pub mod datetime;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod fields;
pub mod observer;
pub mod options;

pub use client::ApiClient;
pub use decode::{ListShape, Page, PageInfo, ShapeKind, Strategy, decode_list, decode_one};
pub use endpoint::Endpoint;
pub use error::{ApiError, ApiResult};
pub use observer::{DecodeObserver, Observation, RecordingObserver, TracingObserver};
pub use options::DecodeOptions;
