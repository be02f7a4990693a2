//! Events Domain
//!
//! Scheduled events stored by the remote events API. Each event points at a
//! category and a location by ID and may carry either as an embedded object.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Event Flow                          │
//! ├──────────────────────────────────────────────────────────┤
//! │                                                          │
//! │  HTTP /events ──► EventService (validate, exists check)  │
//! │                        │                                 │
//! │                        ▼                                 │
//! │               HttpEventRepository                        │
//! │                        │                                 │
//! │          ApiClient ────┴──► decode ──► repair FK ──►     │
//! │                                         │                │
//! │                                         ▼                │
//! │                                 DecodeObserver           │
//! │                                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```

use utoipa::OpenApi;

mod error;
mod handlers;
mod http;
mod models;
mod repository;
mod service;

pub use error::{EventError, EventResult};
pub use handlers::{EventsState, events_router};
pub use http::{EVENTS, HttpEventRepository};
pub use models::{Backfill, Event, EventDto};
pub use repository::EventRepository;
pub use service::EventService;

/// OpenAPI documentation for Events API
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_events,
        handlers::create_event,
        handlers::get_event,
        handlers::update_event,
        handlers::delete_event,
    ),
    components(
        schemas(Event, EventDto),
        responses(
            axum_helpers::errors::responses::NotFoundResponse,
            axum_helpers::errors::responses::BadRequestValidationResponse,
            axum_helpers::errors::responses::BadRequestIdResponse,
            axum_helpers::errors::responses::BadGatewayResponse,
        )
    ),
    tags(
        (name = "events", description = "Event scheduling endpoints")
    )
)]
pub struct ApiDoc;
