#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use polyglot_api::config::ServerConfig;
use polyglot_api::router::build_app_router;
use polyglot_api::state::AppState;
use polyglot_core::bridge::BridgeCommand;
use polyglot_core::results::ResultStore;
use polyglot_core::xdg::BaseDirs;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin and no request timeout.
pub fn test_config(processor: BridgeCommand) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 0,
        processor,
    }
}

/// Processor stand-in run through `sh -c`.
///
/// The bridge appends `--input <text>`, so `$2` is the caller's text.
pub fn sh(script: &str) -> BridgeCommand {
    BridgeCommand {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string(), "sh".to_string()],
        working_directory: None,
    }
}

/// Build the full application router using the production middleware
/// stack, a processor command and a result directory.
pub fn build_test_app(processor: BridgeCommand, results_dir: &Path) -> Router {
    build_test_app_with_dirs(processor, results_dir, BaseDirs::default())
}

pub fn build_test_app_with_dirs(
    processor: BridgeCommand,
    results_dir: &Path,
    base_dirs: BaseDirs,
) -> Router {
    let config = test_config(processor);
    let state = AppState::new(config.clone(), ResultStore::new(results_dir), base_dirs);
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
