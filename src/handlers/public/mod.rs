// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition plus service metadata. No middleware is layered on these routes.

pub mod auth;
pub mod system;

pub use auth::*;
pub use system::{health, root};
