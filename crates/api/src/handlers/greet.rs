use axum::extract::{Path, Query, State};
use axum::Json;
use polyglot_core::greeting::Greeting;
use polyglot_core::results::APP_DIR;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GreetQuery {
    pub greeting: Option<String>,
    /// Only the literal `true` turns excitement on.
    pub excited: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GreetMetadata {
    pub name: String,
    pub greeting: String,
    pub excited: bool,
    pub config_dir: String,
}

#[derive(Debug, Serialize)]
pub struct GreetResponse {
    pub message: String,
    pub metadata: GreetMetadata,
}

/// GET /api/greet
pub async fn greet_default(
    State(state): State<AppState>,
    Query(query): Query<GreetQuery>,
) -> Json<GreetResponse> {
    Json(build(&state, None, query))
}

/// GET /api/greet/{name}
pub async fn greet_named(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<GreetQuery>,
) -> Json<GreetResponse> {
    Json(build(&state, Some(name), query))
}

fn build(state: &AppState, name: Option<String>, query: GreetQuery) -> GreetResponse {
    let excited = query.excited.as_deref() == Some("true");
    let greeting = Greeting::new(name, query.greeting, excited);

    GreetResponse {
        message: greeting.message(),
        metadata: GreetMetadata {
            config_dir: format!("{}/{APP_DIR}/", state.base_dirs.display_config_home()),
            name: greeting.name,
            greeting: greeting.greeting,
            excited: greeting.excited,
        },
    }
}
