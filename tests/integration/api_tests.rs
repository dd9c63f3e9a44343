//! API integration tests

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{api, AppState};

fn app() -> Router {
    api::create_router(AppState::new())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri));

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

async fn login(app: &Router, role: &str) -> Value {
    let (status, body) = send(app, Method::POST, "/session/login", Some(json!({ "role": role }))).await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn add_book(app: &Router, title: &str, author: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/books",
        Some(json!({ "title": title, "author": author })),
    )
    .await
}

fn book_id(view: &Value, position: usize) -> String {
    view["books"][position]["id"]
        .as_str()
        .expect("No book ID")
        .to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_session_starts_inactive() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/session", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], false);
    assert!(body["role"].is_null());
}

#[tokio::test]
async fn test_login_as_admin_shows_add_form() {
    let app = app();
    let view = login(&app, "admin").await;

    assert_eq!(view["session"]["role"], "admin");
    assert_eq!(view["session"]["active"], true);
    assert_eq!(view["form"]["mode"], "add");
    assert_eq!(view["notice"], "No books available.");
}

#[tokio::test]
async fn test_login_with_unknown_role_is_rejected() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/session/login", Some(json!({ "role": "guest" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, session) = send(&app, Method::GET, "/session", None).await;
    assert_eq!(session["active"], false);
}

#[tokio::test]
async fn test_add_requires_session() {
    let app = app();
    let (status, body) = add_book(&app, "Dune", "Herbert").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "NoSession");
}

#[tokio::test]
async fn test_add_and_duplicate_book() {
    let app = app();
    login(&app, "admin").await;

    let (status, view) = add_book(&app, "Dune", "Herbert").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(view["books"][0]["title"], "Dune");
    assert_eq!(view["books"][0]["status"], "Available");

    let (status, body) = add_book(&app, "dune", " herbert").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate");

    let (_, view) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(view["books"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_add_blank_author_is_rejected() {
    let app = app();
    login(&app, "admin").await;

    let (status, body) = add_book(&app, "Dune", "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_add_with_missing_author_is_rejected() {
    let app = app();
    login(&app, "admin").await;

    let (status, body) = send(&app, Method::POST, "/books", Some(json!({ "title": "A" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, view) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(view["books"], json!([]));
}

#[tokio::test]
async fn test_user_cannot_add_books() {
    let app = app();
    login(&app, "user").await;

    let (status, body) = add_book(&app, "Dune", "Herbert").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "NotAuthorized");
}

#[tokio::test]
async fn test_borrow_twice_is_rejected() {
    let app = app();
    login(&app, "admin").await;
    let (_, view) = add_book(&app, "A", "B").await;
    let id = book_id(&view, 0);

    let view = login(&app, "user").await;
    assert_eq!(view["books"][0]["actions"], json!(["borrow"]));

    let (status, view) = send(&app, Method::POST, &format!("/books/{}/borrow", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["books"][0]["status"], "Borrowed");
    assert_eq!(view["books"][0]["actions"], json!(["return"]));

    let (status, body) = send(&app, Method::POST, &format!("/books/{}/borrow", id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "BookNotAvailable");
}

#[tokio::test]
async fn test_return_is_idempotent() {
    let app = app();
    login(&app, "admin").await;
    let (_, view) = add_book(&app, "A", "B").await;
    let id = book_id(&view, 0);
    login(&app, "user").await;

    send(&app, Method::POST, &format!("/books/{}/borrow", id), None).await;
    for _ in 0..2 {
        let (status, view) = send(&app, Method::POST, &format!("/books/{}/return", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["books"][0]["status"], "Available");
    }
}

#[tokio::test]
async fn test_delete_shifts_positions() {
    let app = app();
    login(&app, "admin").await;
    add_book(&app, "A", "B").await;
    let (_, view) = add_book(&app, "C", "D").await;
    let first = book_id(&view, 0);
    let second = book_id(&view, 1);

    let (status, view) = send(&app, Method::DELETE, &format!("/books/{}", first), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["books"].as_array().map(Vec::len), Some(1));
    assert_eq!(view["books"][0]["title"], "C");
    assert_eq!(view["books"][0]["position"], 0);
    assert_eq!(book_id(&view, 0), second);

    let (status, _) = send(&app, Method::DELETE, &format!("/books/{}", first), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_then_update() {
    let app = app();
    login(&app, "admin").await;
    let (_, view) = add_book(&app, "A", "B").await;
    let id = book_id(&view, 0);

    let (status, view) = send(&app, Method::POST, &format!("/books/{}/edit", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["form"]["mode"], "update");
    assert_eq!(view["form"]["draft"]["title"], "A");

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/books/{}", id),
        Some(json!({ "title": "", "author": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, view) = send(
        &app,
        Method::PUT,
        &format!("/books/{}", id),
        Some(json!({ "title": "A2", "author": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["books"][0]["title"], "A2");
    assert_eq!(view["form"]["mode"], "add");
}

#[tokio::test]
async fn test_cancel_edit() {
    let app = app();
    login(&app, "admin").await;
    let (_, view) = add_book(&app, "A", "B").await;
    let id = book_id(&view, 0);

    send(&app, Method::POST, &format!("/books/{}/edit", id), None).await;
    let (status, view) = send(&app, Method::DELETE, "/edit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["form"]["mode"], "add");
}

#[tokio::test]
async fn test_logout_clears_catalog() {
    let app = app();
    login(&app, "admin").await;
    add_book(&app, "A", "B").await;
    add_book(&app, "C", "D").await;

    let (status, view) = send(&app, Method::POST, "/session/logout", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["session"]["active"], false);
    assert_eq!(view["books"], json!([]));

    let view = login(&app, "admin").await;
    assert_eq!(view["books"], json!([]));
}

#[tokio::test]
async fn test_invalid_book_id_is_rejected() {
    let app = app();
    login(&app, "user").await;

    let (status, body) = send(&app, Method::POST, "/books/not-a-uuid/borrow", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = app();
    login(&app, "admin").await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/books")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .expect("Failed to build request");
    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body: Value = serde_json::from_slice(&bytes).expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app();
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
}
