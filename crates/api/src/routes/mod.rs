pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                 service health (GET)
/// /process                run the external processor (POST)
/// /results                latest result file (GET)
/// /env                    XDG variables and runtime info (GET)
/// /greet                  greeting with defaults (GET)
/// /greet/{name}           personalised greeting (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/process", post(handlers::process::process))
        .route("/results", get(handlers::results::latest))
        .route("/env", get(handlers::env::environment))
        .route("/greet", get(handlers::greet::greet_default))
        .route("/greet/{name}", get(handlers::greet::greet_named))
}
