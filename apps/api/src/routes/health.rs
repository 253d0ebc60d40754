use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and table source.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "match-api",
        "equivalence_table": state
            .config
            .equivalence_table_path
            .as_deref()
            .unwrap_or("builtin")
    }))
}
