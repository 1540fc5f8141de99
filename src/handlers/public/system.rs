use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - Service name, version and endpoint index
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Mod API (Rust)",
        "version": version,
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "auth": "/register, /login (public - token acquisition)",
            "whoami": "/whoami (token required)",
            "mods": "/mods[/:id] (token required; writes require admin)",
        }
    }))
}

/// GET /health - Liveness check
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "mods": state.records.len().await,
    }))
}
