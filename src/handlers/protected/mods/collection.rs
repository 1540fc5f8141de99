use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::api::JsonBody;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::types::ModRecord;

/// GET /mods - Full collection in insertion order
pub async fn get(State(state): State<AppState>) -> Json<Vec<ModRecord>> {
    Json(state.records.list().await)
}

/// POST /mods - Append a record (admin only)
///
/// The body is stored verbatim; an id that already exists is not rejected.
pub async fn post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(record): JsonBody<ModRecord>,
) -> Result<(StatusCode, Json<ModRecord>), ApiError> {
    let created = state.records.create(record).await;
    tracing::info!("'{}' created mod '{}'", user.username, created.id);

    Ok((StatusCode::CREATED, Json(created)))
}
