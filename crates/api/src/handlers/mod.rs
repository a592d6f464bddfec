pub mod env;
pub mod greet;
pub mod info;
pub mod process;
pub mod results;

use axum::http::{StatusCode, Uri};
use axum::Json;
use serde_json::{json, Value};

/// Fallback for any route that is not mounted.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": format!("The requested resource {} was not found", uri.path()),
        })),
    )
}
