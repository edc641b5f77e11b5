mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use url_minimizer::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, encoded_len};

#[sqlx::test]
async fn test_save_with_alias(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "alias": "ex1" }));
}

#[sqlx::test]
async fn test_resubmitting_same_alias_conflicts(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = common::create_test_server(state.clone());
    let body = json!({ "url": "https://example.com", "alias": "ex1" });

    server.post("/").json(&body).await.assert_status_ok();

    let response = server.post("/").json(&body).await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({ "status": "error", "error": "URL already exists" }));
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_same_alias_different_urls_keeps_first(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = common::create_test_server(state.clone());

    server
        .post("/")
        .json(&json!({ "url": "https://first.com", "alias": "same" }))
        .await
        .assert_status_ok();

    server
        .post("/")
        .json(&json!({ "url": "https://second.com", "alias": "same" }))
        .await
        .assert_status(StatusCode::CONFLICT);

    let url = state.url_service.get_url("same").await.unwrap();
    assert_eq!(url, "https://first.com");
}

#[sqlx::test]
async fn test_save_invalid_url(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool.clone()));

    let response = server.post("/").json(&json!({ "url": "not-a-url" })).await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "status": "error",
        "error": "field Url must be a valid URL"
    }));
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_save_missing_url(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server.post("/").json(&json!({ "alias": "lonely" })).await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"], "field Url is a required field");
}

#[sqlx::test]
async fn test_save_generates_alias(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.org" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "ok");

    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), encoded_len(DEFAULT_ALIAS_LENGTH));
    assert!(
        alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );

    let url = state.url_service.get_url(alias).await.unwrap();
    assert_eq!(url, "https://example.org");
}

#[sqlx::test]
async fn test_save_empty_alias_generates_one(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.org", "alias": "" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert!(!json["alias"].as_str().unwrap().is_empty());
}

#[sqlx::test]
async fn test_save_empty_body(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server.post("/").text("").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "status": "error", "error": "empty request" }));
}

#[sqlx::test]
async fn test_save_malformed_body(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server.post("/").text("{\"url\": ").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "status": "error",
        "error": "failed to decode request"
    }));
}

#[sqlx::test]
async fn test_save_null_body_requires_url(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool.clone()));

    let response = server.post("/").text("null").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "status": "error",
        "error": "field Url is a required field"
    }));
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_storage_failure_is_opaque(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    state.url_service.close().await.unwrap();
    let server = common::create_test_server(state);

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "status": "error", "error": "failed to add URL" }));
}

#[sqlx::test]
async fn test_response_carries_request_id(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_save_against_memory_store() {
    let state = common::create_memory_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "alias": "mem" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        state.url_service.get_url("mem").await.unwrap(),
        "https://example.com"
    );
}
