pub mod auth;
pub mod mods;
pub mod server;
