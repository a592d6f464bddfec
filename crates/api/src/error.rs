use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use polyglot_core::bridge::BridgeError;
use polyglot_core::error::CoreError;
use serde_json::json;

/// Message returned when the result file does not exist yet.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try POST /api/process first.";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce `{ "status": "error", ... }`
/// JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `polyglot_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The external processor could not be launched or exited non-zero.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // Launch and exit failures are not distinguished to the caller.
            AppError::Bridge(err) => {
                tracing::error!(error = %err, "Error running processor");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "status": "error", "message": err.to_string() }),
                )
            }

            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "status": "error",
                        "message": NO_RESULTS_MESSAGE,
                        "error": core.to_string(),
                    }),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "status": "error", "message": msg }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "status": "error", "message": "An internal error occurred" }),
    )
}
