use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use super::new_api_router;
use crate::store::clients::json_file::JsonFileStore;

struct Tools {
    router: Router,
    // Held so the directory outlives the store.
    _dir: TempDir,
}

/// Build the full application router against a fresh temp-dir store.
async fn tools() -> Tools {
    let dir = tempfile::tempdir().expect("expected temp dir creation to succeed");
    let store = JsonFileStore::open(dir.path().join("bookings.json"))
        .await
        .expect("expected store creation to succeed");
    Tools {
        router: Router::new().nest("/api", new_api_router(store)),
        _dir: dir,
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("expected request to produce a response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).expect("expected a JSON response body");
    (status, body)
}

async fn get_bookings(router: &Router) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/bookings")
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

async fn post_booking(router: &Router, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/bookings")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

fn alice() -> Value {
    json!({
        "date": "2024-05-01",
        "time": "19:00",
        "guests": 2,
        "name": "Alice",
        "contact": "a@x.com",
    })
}

#[tokio::test]
async fn test_list_with_no_bookings_is_an_empty_array() {
    let Tools { router, _dir } = tools().await;
    let (status, body) = get_bookings(&router).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_created_booking_appears_in_listing() {
    let Tools { router, _dir } = tools().await;

    let (status, body) = post_booking(&router, &alice()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Booking successful!");
    let created = &body["booking"];
    let id = created["id"].as_str().expect("expected a string id");
    assert!(!id.is_empty());

    // Round-trip: the listed booking matches the creation request
    // field-for-field, plus the server-generated id.
    let (status, listed) = get_bookings(&router).await;
    assert_eq!(status, StatusCode::OK);
    let mut expected = alice();
    expected["id"] = json!(id);
    assert_eq!(listed, json!([expected]));
}

#[tokio::test]
async fn test_each_missing_field_is_a_400_and_leaves_the_collection_unchanged() {
    let Tools { router, _dir } = tools().await;

    for field in ["date", "time", "guests", "name", "contact"] {
        let mut body = alice();
        body.as_object_mut().unwrap().remove(field);
        let (status, response) = post_booking(&router, &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field: {field}");
        assert_eq!(response, json!({ "message": "All fields are required." }));
    }

    let (_, listed) = get_bookings(&router).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_blank_field_is_a_400() {
    let Tools { router, _dir } = tools().await;
    let mut body = alice();
    body["contact"] = json!("");
    let (status, response) = post_booking(&router, &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response, json!({ "message": "All fields are required." }));
}

#[tokio::test]
async fn test_second_booking_for_the_same_slot_is_rejected() {
    let Tools { router, _dir } = tools().await;

    let (status, _) = post_booking(&router, &alice()).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut bob = alice();
    bob["name"] = json!("Bob");
    bob["contact"] = json!("b@x.com");
    let (status, response) = post_booking(&router, &bob).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response, json!({ "message": "Slot is not available." }));

    // Exactly one booking for the slot, and it is the first one.
    let (_, listed) = get_bookings(&router).await;
    let entries = listed.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Alice");
}

#[tokio::test]
async fn test_same_slot_on_a_different_date_is_accepted() {
    let Tools { router, _dir } = tools().await;

    let (status, _) = post_booking(&router, &alice()).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut other = alice();
    other["date"] = json!("2024-05-02");
    let (status, _) = post_booking(&router, &other).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_guests_may_be_a_string_and_is_preserved() {
    let Tools { router, _dir } = tools().await;

    let mut body = alice();
    body["guests"] = json!("2");
    let (status, response) = post_booking(&router, &body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["booking"]["guests"], json!("2"));

    let (_, listed) = get_bookings(&router).await;
    assert_eq!(listed[0]["guests"], json!("2"));
}
