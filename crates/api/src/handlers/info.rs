use axum::Json;
use serde_json::{json, Value};

/// GET /
///
/// Welcome message and a map of the available endpoints.
pub async fn welcome() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Polyglot Example!",
        "description": "An HTTP API that delegates processing to an external interpreter",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "process": "POST /api/process",
            "results": "/api/results",
            "environment": "/api/env",
            "greeting": "/api/greet/{name}",
        },
        "components": {
            "api": "Rust axum server (this server)",
            "processor": "External data processor (child process)",
        },
    }))
}
