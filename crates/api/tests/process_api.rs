//! Integration tests for POST /api/process.
//!
//! The processor is replaced by small `sh -c` scripts so each test controls
//! the child's stdout, stderr and exit code.
#![cfg(unix)]

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_raw, sh};
use polyglot_core::bridge::BridgeCommand;
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: zero exit returns stdout and echoes input
// ---------------------------------------------------------------------------

#[tokio::test]
async fn process_success_returns_output_and_input() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(sh(r#"printf 'processed:%s' "$2""#), dir.path());

    let response = post_json(app, "/api/process", json!({ "input": "hello" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Processing completed");
    assert!(json["timestamp"].is_string());
    assert_eq!(json["result"]["output"], "processed:hello");
    assert_eq!(json["result"]["input"], "hello");
}

// ---------------------------------------------------------------------------
// Test: missing input falls back to the default
// ---------------------------------------------------------------------------

#[tokio::test]
async fn process_without_input_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(sh(r#"printf '%s' "$2""#), dir.path());

    let response = post_json(app, "/api/process", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["input"], "Sample data from API");
    assert_eq!(json["result"]["output"], "Sample data from API");
}

#[tokio::test]
async fn process_with_empty_body_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(sh(r#"printf '%s' "$2""#), dir.path());

    let response = post_raw(app, "/api/process", "").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["input"], "Sample data from API");
}

// ---------------------------------------------------------------------------
// Test: nonzero exit maps to 500 carrying stderr
// ---------------------------------------------------------------------------

#[tokio::test]
async fn process_failure_returns_500_with_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(
        sh("echo 'ModuleNotFoundError: processor' >&2; exit 1"),
        dir.path(),
    );

    let response = post_json(app, "/api/process", json!({ "input": "x" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    let message = json["message"].as_str().unwrap();
    assert!(message.starts_with("subprocess failed"), "got: {message}");
    assert!(message.contains("ModuleNotFoundError"), "got: {message}");
}

// ---------------------------------------------------------------------------
// Test: launch failure maps to 500 with the underlying error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn process_launch_failure_returns_500() {
    let dir = tempfile::tempdir().unwrap();
    let command = BridgeCommand {
        program: "/nonexistent/polyglot-processor".to_string(),
        args: vec![],
        working_directory: None,
    };
    let app = common::build_test_app(command, dir.path());

    let response = post_json(app, "/api/process", json!({ "input": "x" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    let message = json["message"].as_str().unwrap();
    assert!(
        !message.starts_with("subprocess failed"),
        "launch errors should surface the underlying error, got: {message}"
    );
    assert!(message.contains("No such file or directory"), "got: {message}");
}

// ---------------------------------------------------------------------------
// Test: malformed JSON is a 400, and the processor is never started
// ---------------------------------------------------------------------------

#[tokio::test]
async fn process_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("started");
    let script = format!("touch '{}'", marker.display());
    let app = common::build_test_app(sh(&script), dir.path());

    let response = post_raw(app, "/api/process", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert!(!marker.exists(), "processor must not run for a bad request");
}

// ---------------------------------------------------------------------------
// Test: concurrent requests each get their own child and output
// ---------------------------------------------------------------------------

#[tokio::test]
async fn concurrent_requests_do_not_cross_contaminate() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(sh(r#"sleep 0.05; printf 'out:%s' "$2""#), dir.path());

    let inputs: Vec<String> = (0..10).map(|i| format!("request-{i}")).collect();
    let responses = futures::future::join_all(inputs.iter().map(|input| {
        let app = app.clone();
        async move { post_json(app, "/api/process", json!({ "input": input })).await }
    }))
    .await;

    for (input, response) in inputs.iter().zip(responses) {
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["result"]["input"], input.as_str());
        assert_eq!(json["result"]["output"], format!("out:{input}"));
    }
}
