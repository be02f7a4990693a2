//! Events portal
//!
//! JSON front for the remote events API: categories, events and locations
//! under `/api`, Swagger UI at `/swagger-ui` and liveness at `/health`.

use axum::Router;
use axum_helpers::server::health_router;

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use state::AppState;

/// Compose the API routes, docs, middleware and health endpoint.
pub async fn build_app(state: &AppState) -> std::io::Result<Router> {
    let api_routes = api::routes(state);

    // create_router adds docs/middleware to our composed routes
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    Ok(router.merge(health_router(state.config.app)))
}
