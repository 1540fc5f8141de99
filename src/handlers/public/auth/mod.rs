// handlers/public/auth/mod.rs - Token acquisition endpoints (no authentication)

pub mod session; // POST /login - verify credentials, issue session token
pub mod user; // POST /register - create a `user`-role account

pub use session::login as session_login;
pub use user::register as user_register;
