use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::api::JsonBody;
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::Credentials;

/// POST /register - Register new user account
///
/// New accounts always get the `user` role. Input is not validated beyond
/// being a JSON object; empty usernames and passwords are accepted.
///
/// Expected Input:
/// ```json
/// { "username": "string", "password": "string" }
/// ```
///
/// Responses: 201 on success, 409 if the username is taken, 400 on a malformed body.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(creds): JsonBody<Credentials>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    state.credentials.register(&creds.username, &creds.password).await?;
    tracing::info!("Registered new user '{}'", creds.username);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "user registered successfully" })),
    ))
}
