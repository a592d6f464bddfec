//! Trigger the external processor.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use polyglot_core::bridge::Invocation;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Input used when the request does not provide one.
pub const DEFAULT_INPUT: &str = "Sample data from API";

/// Request body for POST /api/process. The whole body is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessRequest {
    pub input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
    pub result: Invocation,
}

/// POST /api/process
///
/// Runs the processor once with the request's input and waits for it to
/// finish. Accepts an empty body.
pub async fn process(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ProcessResponse>> {
    let request = parse_body(&body)?;
    let input = request.input.unwrap_or_else(|| DEFAULT_INPUT.to_string());

    tracing::info!(
        program = %state.bridge.command().program,
        input_len = input.len(),
        "Triggering processor"
    );
    let started = Instant::now();

    let result = state.bridge.invoke(&input).await?;

    tracing::info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        output_len = result.output.len(),
        "Processor finished"
    );

    Ok(Json(ProcessResponse {
        status: "success",
        message: "Processing completed",
        timestamp: Utc::now(),
        result,
    }))
}

fn parse_body(body: &[u8]) -> AppResult<ProcessRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ProcessRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}
