use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::JsonBody;
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::Credentials;

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /login - Authenticate user and receive a session token
///
/// Expected Input:
/// ```json
/// { "username": "string", "password": "string" }
/// ```
///
/// Expected Output (Success):
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiI..." }
/// ```
///
/// Unknown users and wrong passwords both produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(creds): JsonBody<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    let role = state
        .credentials
        .verify(&creds.username, &creds.password)
        .await
        .map_err(|e| {
            tracing::warn!("Login failed for '{}'", creds.username);
            ApiError::from(e)
        })?;

    let token = state.tokens.issue(&creds.username, role)?;
    tracing::info!("Issued session token for '{}' ({})", creds.username, role);

    Ok(Json(LoginResponse { token }))
}
