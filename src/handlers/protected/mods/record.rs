use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::api::JsonBody;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::types::ModRecord;

/// GET /mods/:id - First record with the given id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ModRecord>, ApiError> {
    Ok(Json(state.records.get(&id).await?))
}

/// PUT /mods/:id - Replace a record in place (admin only)
///
/// The stored record is the request body as sent, including its `id`.
pub async fn put(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    JsonBody(record): JsonBody<ModRecord>,
) -> Result<Json<ModRecord>, ApiError> {
    let updated = state.records.update(&id, record).await?;
    tracing::info!("'{}' updated mod '{}'", user.username, id);

    Ok(Json(updated))
}

/// DELETE /mods/:id - Remove a record (admin only)
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.records.delete(&id).await?;
    tracing::info!("'{}' deleted mod '{}'", user.username, id);

    Ok(Json(json!({ "message": "mod deleted" })))
}
