// --- File: crates/slotbook_common/src/routes.rs ---

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Creates a router containing routes shared by every Slotbook server.
pub fn routes() -> Router {
    Router::new().route("/health", get(health))
}
