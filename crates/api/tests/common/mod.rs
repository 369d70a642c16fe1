#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use roster_api::config::{LogFormat, ServerConfig};
use roster_api::router::build_app_router;
use roster_api::state::AppState;
use roster_db::{DbConfig, DbPool};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and an in-memory database.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        db: DbConfig::in_memory(),
    }
}

/// Open the configured database and create the schema.
pub async fn test_pool(config: &ServerConfig) -> DbPool {
    let pool = roster_db::create_pool(&config.db).await.unwrap();
    roster_db::init_schema(&pool).await.unwrap();
    pool
}

/// Build the full application router over a fresh in-memory database.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub async fn build_test_app() -> Router {
    build_app_with(test_config()).await
}

/// Like [`build_test_app`] but with foreign keys enforced by SQLite.
pub async fn build_test_app_enforcing_fks() -> Router {
    let mut config = test_config();
    config.db.enforce_foreign_keys = true;
    build_app_with(config).await
}

async fn build_app_with(config: ServerConfig) -> Router {
    let pool = test_pool(&config).await;
    build_app_router(AppState { pool }, &config)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::delete(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body).await
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
