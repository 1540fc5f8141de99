// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (session token; writes also need the admin role)

pub mod protected;
pub mod public;
