use axum::{Extension, Json};

use crate::middleware::AuthUser;

/// GET /whoami - Claims resolved from the caller's session token
pub async fn whoami(Extension(user): Extension<AuthUser>) -> Json<AuthUser> {
    Json(user)
}
