//! Repository tests for the Categories domain against an in-process fake
//! of the remote API.

use axum::http::{Method, StatusCode};
use domain_categories::*;
use remote_api::{ApiError, Observation, RecordingObserver, ShapeKind};
use serde_json::json;
use std::sync::Arc;
use test_utils::{FakeRemoteApi, KeyCase, ListStyle, TestDataBuilder, assertions::*};

async fn setup() -> (FakeRemoteApi, HttpCategoryRepository) {
    let api = FakeRemoteApi::start().await;
    let repo = HttpCategoryRepository::new(api.client());
    (api, repo)
}

#[tokio::test]
async fn test_every_list_shape_yields_the_same_categories() {
    let (api, repo) = setup().await;
    api.seed("categories", json!({"name": "Music", "description": "Concerts"}));
    api.seed("categories", json!({"name": "Sports", "description": "Games"}));

    for style in [
        ListStyle::Array,
        ListStyle::Items,
        ListStyle::Data,
        ListStyle::Results,
        ListStyle::Collection,
    ] {
        api.set_list_style(style);
        let names: Vec<String> = repo.get_all().await.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Music", "Sports"], "list style {:?}", style);
    }
}

#[tokio::test]
async fn test_single_object_list_becomes_one_element() {
    let (api, repo) = setup().await;
    api.seed("categories", json!({"name": "Only"}));
    api.set_list_style(ListStyle::Single);

    let categories = repo.get_all().await;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Only");
}

#[tokio::test]
async fn test_pascal_case_keys_decode() {
    let (api, repo) = setup().await;
    let id = api.seed("categories", json!({"name": "Music", "description": "Concerts"}));
    api.set_key_case(KeyCase::Pascal);
    api.set_list_style(ListStyle::Items);

    let all = repo.get_all().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].description, "Concerts");

    let one = assert_some(repo.get_by_id(id).await, "pascal case get");
    assert_eq!(one.name, "Music");
}

#[tokio::test]
async fn test_unrecognized_list_degrades_to_empty_and_is_observed() {
    let api = FakeRemoteApi::start().await;
    let observer = Arc::new(RecordingObserver::new());
    let repo = HttpCategoryRepository::new(api.client_with_observer(observer.clone()));
    api.script(
        Method::GET,
        "/api/v1/Categories",
        StatusCode::OK,
        r#"{"message":"maintenance"}"#,
    );

    assert!(repo.get_all().await.is_empty());
    assert!(
        observer
            .observations()
            .iter()
            .any(|o| matches!(o, Observation::DecodeFailed { .. })),
        "expected a decode failure observation, got {:?}",
        observer.observations()
    );
}

#[tokio::test]
async fn test_empty_collection_is_reported_as_empty() {
    let api = FakeRemoteApi::start().await;
    let observer = Arc::new(RecordingObserver::new());
    let repo = HttpCategoryRepository::new(api.client_with_observer(observer.clone()));

    assert!(repo.get_all().await.is_empty());
    assert!(observer.observations().iter().any(|o| matches!(
        o,
        Observation::ShapeResolved {
            shape: ShapeKind::Empty | ShapeKind::Array,
            count: 0,
            ..
        }
    )));
}

#[tokio::test]
async fn test_server_error_on_read_degrades() {
    let (api, repo) = setup().await;
    api.script(
        Method::GET,
        "/api/v1/Categories/7",
        StatusCode::INTERNAL_SERVER_ERROR,
        "boom",
    );

    assert_none(repo.get_by_id(7).await, "500 on get");
}

#[tokio::test]
async fn test_empty_single_read_body_is_none() {
    let (api, repo) = setup().await;
    api.script(Method::GET, "/api/v1/Categories/7", StatusCode::OK, "");
    api.script(Method::GET, "/api/v1/Categories/8", StatusCode::OK, "  \n");

    assert_none(repo.get_by_id(7).await, "empty body");
    assert_none(repo.get_by_id(8).await, "whitespace body");
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (api, repo) = setup().await;
    let builder = TestDataBuilder::from_test_name("category_round_trip");
    let name = builder.name("category", "music");

    let created = repo
        .create(Category {
            id: 0,
            name: name.clone(),
            description: "Concerts".to_string(),
        })
        .await
        .unwrap();
    assert_assigned_id(created.id, "create");

    let fetched = assert_some(repo.get_by_id(created.id).await, "get after create");
    assert_eq!(fetched, created);
    assert_eq!(api.count("categories"), 1);
}

#[tokio::test]
async fn test_update_replaces_stored_entity() {
    let (api, repo) = setup().await;
    let id = api.seed("categories", json!({"name": "Old", "description": "Old"}));

    let updated = repo
        .update(Category {
            id,
            name: "New".to_string(),
            description: "Fresh".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "New");
    assert_eq!(api.stored("categories", id).unwrap()["description"], "Fresh");
}

#[tokio::test]
async fn test_rejected_write_surfaces_status() {
    let (api, repo) = setup().await;
    api.script(
        Method::POST,
        "/api/v1/Categories",
        StatusCode::BAD_REQUEST,
        r#"{"title":"One or more validation errors occurred."}"#,
    );

    let err = repo.create(Category::default()).await.unwrap_err();
    match err {
        CategoryError::Remote(ApiError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("validation errors"));
        }
        other => panic!("expected remote status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_write_response_is_a_decode_error() {
    let (api, repo) = setup().await;
    api.script(Method::POST, "/api/v1/Categories", StatusCode::CREATED, "[]");

    let err = repo.create(Category::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to create category");
}

#[tokio::test]
async fn test_delete_reports_remote_outcome() {
    let (api, repo) = setup().await;
    let builder = TestDataBuilder::from_test_name("category_delete");
    let id = api.seed("categories", json!({"name": "Temp"}));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(builder.missing_id()).await.unwrap());
    assert_eq!(api.count("categories"), 0);
}

#[tokio::test]
async fn test_service_update_of_missing_category_never_writes() {
    let (api, repo) = setup().await;
    let service = CategoryService::new(repo);

    let result = service
        .update_category(
            404,
            CategoryDto {
                name: "Music".to_string(),
                description: String::new(),
            },
        )
        .await;

    assert!(matches!(result, Err(CategoryError::NotFound(404))));
    assert_no_writes(&api.writes(), "update of missing category");
}
