use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use serde::Serialize;

use crate::auth::Claims;
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::Role;

/// Authenticated user context extracted from the session token
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub username: String,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Token authentication middleware. Rejects with 401 before the handler runs,
/// otherwise injects `AuthUser` into the request extensions.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_headers(request.headers()).map_err(|msg| {
        tracing::warn!("Authentication failed: {}", msg);
        ApiError::unauthorized("unauthorized")
    })?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Authentication failed: {}", e);
        ApiError::from(e)
    })?;

    let auth_user = AuthUser::from(claims);
    tracing::debug!("Authenticated '{}' as {}", auth_user.username, auth_user.role);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Read the token from the Authorization header.
///
/// Clients send the raw token; a `Bearer ` prefix is stripped when present.
fn extract_token_from_headers(headers: &HeaderMap) -> Result<&str, &'static str> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or("missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "invalid Authorization header format")?
        .trim();

    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str).trim();
    if token.is_empty() {
        return Err("empty token");
    }
    Ok(token)
}
