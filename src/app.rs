use axum::{
    handler::Handler,
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{protected, public};
use crate::middleware::{jwt_auth_middleware, require_admin_middleware};
use crate::state::AppState;

/// Build the full application router around an already-constructed state
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .merge(auth_public_routes())
        // Protected
        .merge(protected_routes(state.clone()))
        .with_state(state.clone());

    if let Some(cors) = cors_layer(&state) {
        app = app.layer(cors);
    }
    if state.config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

fn auth_public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(public::user_register))
        .route("/login", post(public::session_login))
}

/// Token-gated routes. The admin gate wraps only the write handlers, inside
/// the authentication layer, so it always sees the resolved `AuthUser`.
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/whoami", get(protected::session_whoami))
        .route(
            "/mods",
            get(protected::collection_get)
                .post(protected::collection_post.layer(middleware::from_fn(require_admin_middleware))),
        )
        .route(
            "/mods/:id",
            get(protected::record_get)
                .put(protected::record_put.layer(middleware::from_fn(require_admin_middleware)))
                .delete(protected::record_delete.layer(middleware::from_fn(require_admin_middleware))),
        )
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer(state: &AppState) -> Option<CorsLayer> {
    let security = &state.config.security;
    if !security.enable_cors {
        return None;
    }
    if security.cors_origins.is_empty() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
