use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub uptime_secs: f64,
    pub components: HealthComponents,
}

#[derive(Serialize)]
pub struct HealthComponents {
    pub api: ComponentStatus,
    pub processor: ComponentStatus,
}

#[derive(Serialize)]
pub struct ComponentStatus {
    pub status: &'static str,
    /// Crate version for the API, program name for the processor.
    pub detail: String,
}

/// GET /health -- reports the server as up along with its processor command.
///
/// The processor is not launched here; it is only reported as configured.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        uptime_secs: state.uptime_secs(),
        components: HealthComponents {
            api: ComponentStatus {
                status: "running",
                detail: env!("CARGO_PKG_VERSION").to_string(),
            },
            processor: ComponentStatus {
                status: "configured",
                detail: state.bridge.command().program.clone(),
            },
        },
    })
}

/// Mount health check routes (nested under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
