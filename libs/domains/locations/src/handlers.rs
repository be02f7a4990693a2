use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::{
    errors::responses::{BadRequestIdResponse, NotFoundResponse},
    IdPath,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{LocationError, LocationResult};
use crate::models::{Location, LocationDto};
use crate::repository::LocationRepository;
use crate::service::LocationService;

pub const TAG: &str = "Locations";

/// OpenAPI documentation for Locations API
#[derive(OpenApi)]
#[openapi(
    paths(list_locations, get_location),
    components(
        schemas(Location, LocationDto),
        responses(NotFoundResponse, BadRequestIdResponse)
    ),
    tags(
        (name = TAG, description = "Event venues (read-only)")
    )
)]
pub struct ApiDoc;

/// Create the read-only location router
pub fn router<R: LocationRepository + 'static>(service: LocationService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_locations))
        .route("/{id}", get(get_location))
        .with_state(shared_service)
}

/// List all locations
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of locations", body = Vec<Location>)
    )
)]
async fn list_locations<R: LocationRepository>(
    State(service): State<Arc<LocationService<R>>>,
) -> Json<Vec<Location>> {
    Json(service.get_all_locations().await)
}

/// Get a location by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location found", body = Location),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_location<R: LocationRepository>(
    State(service): State<Arc<LocationService<R>>>,
    IdPath(id): IdPath,
) -> LocationResult<Json<Location>> {
    service
        .get_location_by_id(id)
        .await
        .map(Json)
        .ok_or(LocationError::NotFound(id))
}
