//! API integration tests
//!
//! Drives the real router in-process; every test gets its own freshly
//! seeded store.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use book_catalog_server::{
    config::AppConfig,
    create_router,
    repository::{books::seed_books, Repository},
    services::Services,
    AppState,
};

fn test_app() -> Router {
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(Repository::new(seed_books()))),
    };
    create_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

fn with_json(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Failed to parse response body")
}

fn valid_book() -> Value {
    json!({
        "title": "Computer Science Pro",
        "author": "codingwithroby",
        "description": "A very nice book",
        "rating": 5,
        "published_date": 2029
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let response = app.oneshot(get("/health")).await.expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_all_books() {
    let app = test_app();

    let response = app.oneshot(get("/books")).await.expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let books = body.as_array().expect("Expected an array");
    assert_eq!(books.len(), 6);
    assert_eq!(books[0]["title"], "Computer Science Pro");
    assert_eq!(books[5]["id"], 6);
}

#[tokio::test]
async fn test_get_book_by_id() {
    let app = test_app();

    let response = app.oneshot(get("/books/5")).await.expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "HP2");
    assert_eq!(body["author"], "JK Rowling");
}

#[tokio::test]
async fn test_get_missing_book_is_404() {
    let app = test_app();

    let response = app.oneshot(get("/books/42")).await.expect("Request failed");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Book does not exist.");
}

#[tokio::test]
async fn test_get_book_rejects_non_positive_id() {
    let app = test_app();

    let response = app.oneshot(get("/books/0")).await.expect("Request failed");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_filter_by_rating() {
    let app = test_app();

    let response = app
        .oneshot(get("/books/?book_rating=5"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let ids: Vec<i64> = body
        .as_array()
        .expect("Expected an array")
        .iter()
        .map(|book| book["id"].as_i64().expect("Expected an id"))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 6]);
}

#[tokio::test]
async fn test_filter_by_rating_empty_match_is_ok() {
    let app = test_app();

    let response = app
        .oneshot(get("/books/?book_rating=1"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().expect("Expected an array").len(), 0);
}

#[tokio::test]
async fn test_filter_by_rating_out_of_range() {
    let app = test_app();

    let response = app
        .oneshot(get("/books/?book_rating=6"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_filter_by_published_date() {
    let app = test_app();

    let response = app
        .oneshot(get("/books/publish/?published_date=2022"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let books = body.as_array().expect("Expected an array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Be Fast with FastAPI");
}

#[tokio::test]
async fn test_filter_by_published_date_empty_match_is_ok() {
    let app = test_app();

    let response = app
        .oneshot(get("/books/publish/?published_date=2500"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().expect("Expected an array").len(), 0);
}

#[tokio::test]
async fn test_filter_by_published_date_out_of_range() {
    let app = test_app();

    let response = app
        .oneshot(get("/books/publish/?published_date=1999"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_book_assigns_next_id() {
    let app = test_app();

    let response = app
        .oneshot(with_json(Method::POST, "/books/", &valid_book()))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 7);
    assert_eq!(body["title"], "Computer Science Pro");
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let app = test_app();
    let mut payload = valid_book();
    payload["id"] = json!(99);

    let response = app
        .oneshot(with_json(Method::POST, "/books/", &payload))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 7);
}

#[tokio::test]
async fn test_create_invalid_book_is_rejected() {
    let app = test_app();
    let mut payload = valid_book();
    payload["title"] = json!("ab");

    let response = app
        .clone()
        .oneshot(with_json(Method::POST, "/books/", &payload))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // No mutation happened
    let response = app.oneshot(get("/books")).await.expect("Request failed");
    let body = body_json(response).await;
    assert_eq!(body.as_array().expect("Expected an array").len(), 6);
}

#[tokio::test]
async fn test_update_book() {
    let app = test_app();
    let mut payload = valid_book();
    payload["rating"] = json!(1);

    let response = app
        .clone()
        .oneshot(with_json(Method::PUT, "/books/2", &payload))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/books/2")).await.expect("Request failed");
    let body = body_json(response).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["rating"], 1);
}

#[tokio::test]
async fn test_update_missing_book_is_404() {
    let app = test_app();

    let response = app
        .oneshot(with_json(Method::PUT, "/books/42", &valid_book()))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Book does not exist.");
}

#[tokio::test]
async fn test_update_invalid_body_is_rejected() {
    let app = test_app();
    let mut payload = valid_book();
    payload["description"] = json!("");

    let response = app
        .oneshot(with_json(Method::PUT, "/books/2", &payload))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_book() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/books/6")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/books/6")).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_book_is_404() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/books/42")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_rejects_non_positive_id() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/books/-1")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// Full lifecycle against the seeded collection: create, read back,
/// update, delete, then observe the 404.
#[tokio::test]
async fn test_book_lifecycle() {
    let app = test_app();

    // POST a valid book -> id 7
    let response = app
        .clone()
        .oneshot(with_json(Method::POST, "/books/", &valid_book()))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], 7);

    // GET /books/7 returns the created record
    let response = app.clone().oneshot(get("/books/7")).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    // PUT /books/7 with rating=1
    let mut payload = valid_book();
    payload["rating"] = json!(1);
    let response = app
        .clone()
        .oneshot(with_json(Method::PUT, "/books/7", &payload))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get("/books/7")).await.expect("Request failed");
    assert_eq!(body_json(response).await["rating"], 1);

    // DELETE /books/7
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/books/7")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // GET /books/7 -> 404
    let response = app.oneshot(get("/books/7")).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Book does not exist.");
}
