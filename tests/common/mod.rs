#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use url_minimizer::infrastructure::persistence::{InMemoryUrlRepository, SqliteUrlRepository};
use url_minimizer::routes::app_router;
use url_minimizer::state::AppState;
use url_minimizer::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

pub async fn insert_url(pool: &SqlitePool, alias: &str, url: &str) -> i64 {
    sqlx::query("INSERT INTO url (alias, url) VALUES (?1, ?2)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(SqliteUrlRepository::new(pool)),
        DEFAULT_ALIAS_LENGTH,
    )
}

pub fn create_memory_state() -> AppState {
    AppState::new(Arc::new(InMemoryUrlRepository::new()), DEFAULT_ALIAS_LENGTH)
}

pub fn create_test_app(state: AppState) -> Router {
    app_router(state, Duration::from_secs(5))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_test_app(state)).unwrap()
}
