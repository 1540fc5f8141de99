// handlers/protected/mod.rs - Protected handlers (session token required)
//
// Every route here sits behind `jwt_auth_middleware`, so handlers can rely on an
// `AuthUser` extension. Write routes additionally sit behind `require_admin_middleware`.

pub mod auth; // GET /whoami
pub mod mods; // /mods CRUD

pub use auth::*;
pub use mods::*;
