use axum::Router;
use std::sync::Arc;

use domain_categories::{CategoryService, HttpCategoryRepository};
use domain_events::{EventService, HttpEventRepository};
use domain_locations::{HttpLocationRepository, LocationService};

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Every domain gets its own repository over a clone of the shared client.
pub fn routes(state: &crate::state::AppState) -> Router {
    let categories = CategoryService::new(HttpCategoryRepository::new(state.client.clone()));
    let locations = LocationService::new(HttpLocationRepository::new(state.client.clone()));
    let events = EventService::new(HttpEventRepository::new(state.client.clone()));

    Router::new()
        .nest("/categories", domain_categories::handlers::router(categories))
        .nest("/locations", domain_locations::handlers::router(locations))
        .nest(
            "/events",
            domain_events::events_router().with_state(Arc::new(events)),
        )
}
