pub mod credentials;
pub mod token;

pub use credentials::{CredentialError, CredentialStore};
pub use token::{Claims, TokenError, TokenService};
