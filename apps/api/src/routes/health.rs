use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and the active
/// storage and matching configuration.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "funda-api",
        "storage": {
            "backend": state.store.backend(),
            "key": state.config.storage_key,
        },
        "matchPolicy": state.config.match_policy,
    }))
}
