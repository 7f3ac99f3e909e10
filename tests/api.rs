//! API integration tests
//!
//! End-to-end scenarios against the full router with an in-memory store:
//! registration, login, identity resolution, and the ownership policy on
//! every mutating blog endpoint.

use std::sync::Arc;

use axum_test::TestServer;
use axum::http::StatusCode;
use serde_json::json;

use blogit::backend::auth::TokenService;
use blogit::backend::routes::create_router;
use blogit::backend::server::state::AppState;
use blogit::backend::store::MemoryStore;

const SECRET: &str = "integration-test-secret";

fn test_server() -> TestServer {
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        TokenService::new(SECRET, Some(3600)),
    );
    TestServer::new(create_router(state)).unwrap()
}

async fn register(server: &TestServer, name: &str, email: &str, password: &str) {
    let response = server
        .post("/api/users/register")
        .json(&json!({"name": name, "email": email, "password": password}))
        .await;
    response.assert_status_ok();
}

async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/users/login")
        .json(&json!({"email": email, "password": password}))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    body["token"].as_str().expect("login should return a token").to_string()
}

async fn create_blog(server: &TestServer, token: &str, title: &str, content: &str) -> String {
    let response = server
        .post("/api/blogs/create")
        .add_header("authorization", format!("Bearer {token}"))
        .json(&json!({"title": title, "content": content}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    body["blog"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_register_login_validate_flow() {
    let server = test_server();

    register(&server, "A", "a@x.com", "password1").await;
    let token = login(&server, "a@x.com", "password1").await;

    let response = server
        .get("/api/users/validate-user")
        .add_header("authorization", format!("Bearer {token}"))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "a@x.com");
    assert_eq!(body["data"]["name"], "A");
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_bad_credentials_is_soft_failure() {
    let server = test_server();
    register(&server, "A", "a@x.com", "password1").await;

    for (email, password) in [("a@x.com", "wrong"), ("unknown@x.com", "password1")] {
        let response = server
            .post("/api/users/login")
            .json(&json!({"email": email, "password": password}))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body.get("token").is_none());
    }
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let server = test_server();
    register(&server, "A", "a@x.com", "password1").await;

    let response = server
        .post("/api/users/register")
        .json(&json!({"name": "B", "email": "a@x.com", "password": "password2"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_protected_route_rejects_bad_tokens() {
    let server = test_server();
    register(&server, "A", "a@x.com", "password1").await;
    let token = login(&server, "a@x.com", "password1").await;

    // No token at all.
    let response = server.get("/api/users/validate-user").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    // Wrong scheme.
    let response = server
        .get("/api/users/validate-user")
        .add_header("authorization", format!("Basic {token}"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    // Tampered token: flip one character in the signature.
    let mut tampered = token.clone().into_bytes();
    let last = tampered.len() - 1;
    tampered[last] ^= 0x01;
    let tampered = String::from_utf8(tampered).unwrap();
    assert_ne!(tampered, token);

    let response = server
        .get("/api/users/validate-user")
        .add_header("authorization", format!("Bearer {tampered}"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_for_missing_user_rejected() {
    let server = test_server();

    // Correctly signed, but the embedded id resolves to no one.
    let foreign = TokenService::new(SECRET, Some(3600));
    let token = foreign.issue(uuid::Uuid::new_v4()).unwrap();

    let response = server
        .get("/api/users/validate-user")
        .add_header("authorization", format!("Bearer {token}"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_requires_auth_and_fields() {
    let server = test_server();
    register(&server, "A", "a@x.com", "password1").await;
    let token = login(&server, "a@x.com", "password1").await;

    let response = server
        .post("/api/blogs/create")
        .json(&json!({"title": "T", "content": "C"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .post("/api/blogs/create")
        .add_header("authorization", format!("Bearer {token}"))
        .json(&json!({"title": "", "content": "C"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // A field that is absent entirely is the same validation failure.
    let response = server
        .post("/api/blogs/create")
        .add_header("authorization", format!("Bearer {token}"))
        .json(&json!({"content": "C"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_ignores_spoofed_author() {
    let server = test_server();
    register(&server, "A", "a@x.com", "password1").await;
    let token = login(&server, "a@x.com", "password1").await;

    let response = server
        .post("/api/blogs/create")
        .add_header("authorization", format!("Bearer {token}"))
        .json(&json!({"title": "T", "content": "C", "author": "b@y.com"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["blog"]["author"], "a@x.com");
}

#[tokio::test]
async fn test_public_reads_need_no_auth() {
    let server = test_server();
    register(&server, "A", "a@x.com", "password1").await;
    let token = login(&server, "a@x.com", "password1").await;
    let id = create_blog(&server, &token, "Hello", "World").await;

    let response = server.get("/api/blogs/all-blogs").await;
    response.assert_status_ok();
    let all: serde_json::Value = response.json();
    assert_eq!(all.as_array().unwrap().len(), 1);

    let response = server.get(&format!("/api/blogs/blog/{id}")).await;
    response.assert_status_ok();
    let blog: serde_json::Value = response.json();
    assert_eq!(blog["title"], "Hello");

    let response = server
        .get(&format!("/api/blogs/blog/{}", uuid::Uuid::new_v4()))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cross_author_edit_forbidden_and_unchanged() {
    let server = test_server();
    register(&server, "A", "a@x.com", "password1").await;
    register(&server, "B", "b@y.com", "password2").await;
    let token_a = login(&server, "a@x.com", "password1").await;
    let token_b = login(&server, "b@y.com", "password2").await;

    let id = create_blog(&server, &token_a, "Original", "Content").await;

    let response = server
        .put(&format!("/api/blogs/edit/{id}"))
        .add_header("authorization", format!("Bearer {token_b}"))
        .json(&json!({"title": "Hijacked"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    // Stored record must be unchanged.
    let response = server.get(&format!("/api/blogs/blog/{id}")).await;
    let blog: serde_json::Value = response.json();
    assert_eq!(blog["title"], "Original");
}

#[tokio::test]
async fn test_owner_edit_applies_partial_update() {
    let server = test_server();
    register(&server, "A", "a@x.com", "password1").await;
    let token = login(&server, "a@x.com", "password1").await;
    let id = create_blog(&server, &token, "Original", "Content").await;

    let response = server
        .put(&format!("/api/blogs/edit/{id}"))
        .add_header("authorization", format!("Bearer {token}"))
        .json(&json!({"title": "Updated"}))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["blog"]["title"], "Updated");
    assert_eq!(body["blog"]["content"], "Content");
    assert_eq!(body["blog"]["author"], "a@x.com");
}

#[tokio::test]
async fn test_cross_author_delete_forbidden() {
    let server = test_server();
    register(&server, "A", "a@x.com", "password1").await;
    register(&server, "B", "b@y.com", "password2").await;
    let token_a = login(&server, "a@x.com", "password1").await;
    let token_b = login(&server, "b@y.com", "password2").await;

    let id = create_blog(&server, &token_a, "Mine", "Content").await;

    let response = server
        .delete(&format!("/api/blogs/delete/{id}"))
        .add_header("authorization", format!("Bearer {token_b}"))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = server.get(&format!("/api/blogs/blog/{id}")).await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_delete_missing_blog_is_always_not_found() {
    let server = test_server();
    register(&server, "A", "a@x.com", "password1").await;
    let token = login(&server, "a@x.com", "password1").await;

    // Never existed.
    let response = server
        .delete(&format!("/api/blogs/delete/{}", uuid::Uuid::new_v4()))
        .add_header("authorization", format!("Bearer {token}"))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    // Existed once; the second delete must not silently succeed.
    let id = create_blog(&server, &token, "Short lived", "Content").await;
    let response = server
        .delete(&format!("/api/blogs/delete/{id}"))
        .add_header("authorization", format!("Bearer {token}"))
        .await;
    response.assert_status_ok();

    let response = server
        .delete(&format!("/api/blogs/delete/{id}"))
        .add_header("authorization", format!("Bearer {token}"))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_bodies_share_one_envelope() {
    let server = test_server();

    let response = server.get("/api/users/validate-user").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());

    let response = server.get("/api/nonexistent").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
}
