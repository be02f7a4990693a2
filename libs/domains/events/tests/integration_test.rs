//! Integration tests for the events repository against the fake remote API

use axum::http::{Method, StatusCode};
use domain_events::*;
use remote_api::{Observation, RecordingObserver};
use serde_json::json;
use std::sync::Arc;
use test_utils::{FakeRemoteApi, KeyCase, ListStyle, TestDataBuilder, assertions::*};

fn fall_fair(builder: &TestDataBuilder) -> EventDto {
    EventDto {
        title: "Fall Fair".to_string(),
        description: None,
        start_date: Some(builder.date(0)),
        end_date: Some(builder.date(2)),
        category_id: 1,
        location_id: 2,
    }
}

#[tokio::test]
async fn test_fall_fair_round_trip() {
    let api = FakeRemoteApi::start().await;
    let builder = TestDataBuilder::from_test_name("fall_fair_round_trip");
    let service = EventService::new(HttpEventRepository::new(api.client()));

    let created = service.create_event(fall_fair(&builder)).await.unwrap();
    assert_assigned_id(created.id, "fall fair create");

    let sent = api.writes().pop().unwrap();
    assert_eq!(sent.method, Method::POST);
    assert_eq!(sent.path, "/api/v1/events");
    let body = sent.body.unwrap();
    assert_eq!(body["startDate"], "2025-09-01T00:00:00");
    assert_eq!(body["endDate"], "2025-09-03T00:00:00");
    assert!(body.get("category").is_none());

    let fetched = assert_some(service.get_event_by_id(created.id).await, "fall fair get");
    assert_eq!(fetched.title, "Fall Fair");
    assert_eq!(fetched.start_date, builder.date(0));
    assert_eq!(fetched.end_date, builder.date(2));
    assert_eq!(fetched.category_id, 1);
    assert_eq!(fetched.location_id, 2);
}

#[tokio::test]
async fn test_list_repairs_foreign_keys_and_reports_them() {
    let api = FakeRemoteApi::start().await;
    let observer = Arc::new(RecordingObserver::new());
    let repo = HttpEventRepository::new(api.client_with_observer(observer.clone()));

    api.seed(
        "events",
        json!({
            "title": "Embedded only",
            "startDate": "2025-09-01",
            "endDate": "2025-09-02",
            "categoryId": 0,
            "locationId": 0,
            "category": {"id": 7, "name": "Music"},
            "location": {"id": 3, "name": "Hall", "address": "1 Main St"}
        }),
    );
    api.seed(
        "events",
        json!({
            "title": "Already set",
            "startDate": "2025-09-01",
            "endDate": "2025-09-02",
            "categoryId": 7,
            "locationId": 3,
            "category": {"id": 9, "name": "Other"}
        }),
    );
    api.set_list_style(ListStyle::Items);
    api.set_key_case(KeyCase::Pascal);

    let events = repo.get_all().await;
    assert_eq!(events.len(), 2);
    assert_eq!((events[0].category_id, events[0].location_id), (7, 3));
    assert_eq!(events[1].category_id, 7);

    assert_eq!(
        observer.backfills(),
        vec![("categoryId".to_string(), 7), ("locationId".to_string(), 3)]
    );
}

#[tokio::test]
async fn test_single_read_and_write_responses_are_repaired() {
    let api = FakeRemoteApi::start().await;
    let observer = Arc::new(RecordingObserver::new());
    let repo = HttpEventRepository::new(api.client_with_observer(observer.clone()));
    let id = api.seed(
        "events",
        json!({"title": "Fair", "categoryId": 0, "category": {"id": 5}}),
    );

    let fetched = assert_some(repo.get_by_id(id).await, "get");
    assert_eq!(fetched.category_id, 5);

    api.script(
        Method::POST,
        "/api/v1/events",
        StatusCode::CREATED,
        r#"{"Id":40,"Title":"Fair","LocationId":0,"Location":{"Id":6}}"#,
    );
    let created = repo.create(Event::default()).await.unwrap();
    assert_eq!(created.location_id, 6);

    assert_eq!(observer.backfills().len(), 2);
    assert!(observer.observations().iter().all(|o| match o {
        Observation::ForeignKeyBackfilled { resource, .. } => resource == "events",
        _ => true,
    }));
}

#[tokio::test]
async fn test_update_overwrites_editable_fields_only() {
    let api = FakeRemoteApi::start().await;
    let builder = TestDataBuilder::from_test_name("event_update");
    let service = EventService::new(HttpEventRepository::new(api.client()));
    let id = api.seed(
        "events",
        json!({
            "title": "Old",
            "description": "Old description",
            "startDate": "2024-01-01T10:00:00",
            "endDate": "2024-01-02T10:00:00",
            "status": 2,
            "categoryId": 4,
            "locationId": 4
        }),
    );

    let mut dto = fall_fair(&builder);
    dto.description = Some("New".to_string());
    let updated = service.update_event(id, dto).await.unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.status, 2);
    assert_eq!(updated.title, "Fall Fair");
    assert_eq!(updated.category_id, 1);

    let stored = api.stored("events", id).unwrap();
    assert_eq!(stored["status"], 2);
    assert_eq!(stored["description"], "New");
    assert_eq!(stored["startDate"], "2025-09-01T00:00:00");
}

#[tokio::test]
async fn test_update_to_new_category_drops_stale_embedded_category() {
    let api = FakeRemoteApi::start().await;
    let builder = TestDataBuilder::from_test_name("event_recategorize");
    let service = EventService::new(HttpEventRepository::new(api.client()));
    let id = api.seed(
        "events",
        json!({
            "title": "Old",
            "categoryId": 9,
            "locationId": 2,
            "category": {"id": 9, "name": "Music"},
            "location": {"id": 2, "name": "Hall", "address": "1 Main St"}
        }),
    );

    let updated = service.update_event(id, fall_fair(&builder)).await.unwrap();

    let sent = api.writes().pop().unwrap();
    assert_eq!(sent.method, Method::PUT);
    let body = sent.body.unwrap();
    assert_eq!(body["categoryId"], 1);
    assert!(body.get("category").is_none());
    assert_eq!(body["location"]["id"], 2);

    assert_eq!(updated.category_id, 1);
    assert!(updated.category.is_none());
    assert_eq!(updated.location.map(|l| l.name), Some("Hall".to_string()));
}

#[tokio::test]
async fn test_update_of_missing_event_issues_no_write() {
    let api = FakeRemoteApi::start().await;
    let builder = TestDataBuilder::from_test_name("event_update_missing");
    let service = EventService::new(HttpEventRepository::new(api.client()));

    let result = service
        .update_event(builder.missing_id(), fall_fair(&builder))
        .await;

    assert!(matches!(result, Err(EventError::NotFound(_))));
    assert_no_writes(&api.writes(), "update of missing event");
}

#[tokio::test]
async fn test_invalid_dto_never_reaches_the_api() {
    let api = FakeRemoteApi::start().await;
    let builder = TestDataBuilder::from_test_name("event_invalid");
    let service = EventService::new(HttpEventRepository::new(api.client()));

    let mut dto = fall_fair(&builder);
    dto.title = "ab".to_string();

    assert!(matches!(
        service.create_event(dto).await,
        Err(EventError::Validation(_))
    ));
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_delete_on_404_returns_false() {
    let api = FakeRemoteApi::start().await;
    let repo = HttpEventRepository::new(api.client());

    assert!(!repo.delete(404).await.unwrap());
}

#[tokio::test]
async fn test_unreadable_list_is_empty() {
    let api = FakeRemoteApi::start().await;
    let repo = HttpEventRepository::new(api.client());
    api.script(Method::GET, "/api/v1/events", StatusCode::OK, "   ");

    assert!(repo.get_all().await.is_empty());
}
