use std::path::PathBuf;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub status: &'static str,
    /// Result file contents, verbatim.
    pub result: String,
    pub file: PathBuf,
}

/// GET /api/results
///
/// Returns the processor's latest result file. 404 until one exists.
pub async fn latest(State(state): State<AppState>) -> AppResult<Json<ResultsResponse>> {
    let stored = state.results.read().await?;

    Ok(Json(ResultsResponse {
        status: "success",
        result: stored.content,
        file: stored.path,
    }))
}
