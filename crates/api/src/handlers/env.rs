use axum::extract::State;
use axum::Json;
use polyglot_core::bridge::BridgeCommand;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RuntimeInfo {
    pub version: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
    pub pid: u32,
    pub uptime_secs: f64,
}

#[derive(Debug, Serialize)]
pub struct EnvResponse {
    pub message: &'static str,
    /// XDG variable name to value, `null` when unset.
    pub xdg: Map<String, Value>,
    pub runtime: RuntimeInfo,
    pub processor: BridgeCommand,
}

/// GET /api/env
pub async fn environment(State(state): State<AppState>) -> Json<EnvResponse> {
    let xdg = state
        .base_dirs
        .variables()
        .into_iter()
        .map(|(name, value)| {
            let value = value.map_or(Value::Null, |v| Value::String(v.to_string()));
            (name.to_string(), value)
        })
        .collect();

    Json(EnvResponse {
        message: "Polyglot Environment Information",
        xdg,
        runtime: RuntimeInfo {
            version: env!("CARGO_PKG_VERSION"),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            pid: std::process::id(),
            uptime_secs: state.uptime_secs(),
        },
        processor: state.bridge.command().clone(),
    })
}
