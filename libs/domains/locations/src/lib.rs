//! Locations Domain
//!
//! Read-only access to event venues. Locations are listed and fetched by id;
//! [`LocationDto`] carries the form rules but nothing here mutates a
//! location.
//!
//! ```rust,no_run
//! use domain_locations::{handlers, HttpLocationRepository, LocationService};
//! use remote_api::ApiClient;
//!
//! # fn main() -> Result<(), remote_api::ApiError> {
//! let client = ApiClient::new("https://localhost:5003")?;
//! let router = handlers::router(LocationService::new(HttpLocationRepository::new(client)));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod http;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{LocationError, LocationResult};
pub use http::{HttpLocationRepository, LOCATIONS};
pub use models::{Location, LocationDto};
pub use repository::LocationRepository;
pub use service::LocationService;
