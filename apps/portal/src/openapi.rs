use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Events Portal API",
        version = "0.1.0",
        description = "Events, categories and locations served from the remote events API"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/categories", api = domain_categories::handlers::ApiDoc),
        (path = "/events", api = domain_events::ApiDoc),
        (path = "/locations", api = domain_locations::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
