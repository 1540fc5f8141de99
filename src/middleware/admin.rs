use axum::{extract::Request, middleware::Next, response::Response};

use super::auth::AuthUser;
use crate::error::ApiError;

/// Admin gate. Must be layered inside `jwt_auth_middleware`; a request that reaches
/// it without an `AuthUser` is treated as non-admin.
pub async fn require_admin_middleware(request: Request, next: Next) -> Result<Response, ApiError> {
    match request.extensions().get::<AuthUser>() {
        Some(user) if user.role.is_admin() => {}
        Some(user) => {
            tracing::warn!(
                "Forbidden: '{}' ({}) attempted {} {}",
                user.username,
                user.role,
                request.method(),
                request.uri().path()
            );
            return Err(ApiError::forbidden("forbidden: admin access required"));
        }
        None => {
            tracing::warn!("Forbidden: no authenticated user on {}", request.uri().path());
            return Err(ApiError::forbidden("forbidden: admin access required"));
        }
    }

    Ok(next.run(request).await)
}
