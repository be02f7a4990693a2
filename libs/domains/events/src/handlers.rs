//! HTTP handlers for events API

use crate::error::EventError;
use crate::models::{Event, EventDto};
use crate::repository::EventRepository;
use crate::service::EventService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_helpers::errors::responses::{
    BadGatewayResponse, BadRequestIdResponse, BadRequestValidationResponse, NotFoundResponse,
};
use axum_helpers::{IdPath, ValidatedJson};
use std::sync::Arc;
use tracing::{info, instrument};

/// Events router state
pub type EventsState<R> = Arc<EventService<R>>;

/// Create the events router; the caller supplies the state
pub fn events_router<R: EventRepository + 'static>() -> Router<EventsState<R>> {
    Router::new()
        .route("/", get(list_events::<R>).post(create_event::<R>))
        .route(
            "/{id}",
            get(get_event::<R>)
                .put(update_event::<R>)
                .delete(delete_event::<R>),
        )
}

/// List events
#[utoipa::path(
    get,
    path = "",
    responses(
        (status = 200, description = "List of events", body = Vec<Event>)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn list_events<R: EventRepository>(State(state): State<EventsState<R>>) -> Json<Vec<Event>> {
    Json(state.get_all_events().await)
}

/// Create a new event
#[utoipa::path(
    post,
    path = "",
    request_body = EventDto,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, response = BadRequestValidationResponse),
        (status = 502, response = BadGatewayResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state, dto), fields(event_title = %dto.title))]
pub async fn create_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    ValidatedJson(dto): ValidatedJson<EventDto>,
) -> Result<impl IntoResponse, EventError> {
    let event = state.create_event(dto).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Get event by ID
#[utoipa::path(
    get,
    path = "/{id}",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn get_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    IdPath(id): IdPath,
) -> Result<Json<Event>, EventError> {
    state
        .get_event_by_id(id)
        .await
        .map(Json)
        .ok_or(EventError::NotFound(id))
}

/// Update an event
#[utoipa::path(
    put,
    path = "/{id}",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = EventDto,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 502, response = BadGatewayResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state, dto))]
pub async fn update_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    IdPath(id): IdPath,
    ValidatedJson(dto): ValidatedJson<EventDto>,
) -> Result<Json<Event>, EventError> {
    let event = state.update_event(id, dto).await?;
    Ok(Json(event))
}

/// Delete event by ID
#[utoipa::path(
    delete,
    path = "/{id}",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 502, response = BadGatewayResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn delete_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    IdPath(id): IdPath,
) -> Result<StatusCode, EventError> {
    if state.delete_event(id).await? {
        info!(event_id = id, "Event deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(EventError::NotFound(id))
    }
}
