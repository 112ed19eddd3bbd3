use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports service version and which evaluator answers requests.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "promptwerk",
        "evaluator": state.evaluator.backend(),
        "modelConfigured": state.llm.is_configured(),
    }))
}
