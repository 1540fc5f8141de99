use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::types::Role;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("user already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Password and role live in one entry so every username has exactly one role.
// Passwords are kept in plaintext; hashing is a known gap.
#[derive(Debug, Clone)]
struct Account {
    password: String,
    role: Role,
}

/// In-memory username -> (password, role) mapping
#[derive(Debug, Default)]
pub struct CredentialStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the `admin`/`adminpass` and `user`/`userpass` demo accounts
    pub fn with_demo_accounts() -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(
            "admin".to_string(),
            Account { password: "adminpass".to_string(), role: Role::Admin },
        );
        accounts.insert(
            "user".to_string(),
            Account { password: "userpass".to_string(), role: Role::User },
        );
        Self { accounts: RwLock::new(accounts) }
    }

    /// Create an account with the default `user` role. No validation is applied to either field.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), CredentialError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(username) {
            return Err(CredentialError::AlreadyExists(username.to_string()));
        }

        accounts.insert(
            username.to_string(),
            Account { password: password.to_string(), role: Role::default() },
        );
        debug!("Registered user '{}'", username);
        Ok(())
    }

    /// Return the account's role on an exact match.
    ///
    /// Unknown users and wrong passwords yield the same error.
    pub async fn verify(&self, username: &str, password: &str) -> Result<Role, CredentialError> {
        let accounts = self.accounts.read().await;
        match accounts.get(username) {
            Some(account) if account.password == password => Ok(account.role),
            _ => Err(CredentialError::InvalidCredentials),
        }
    }

    /// Insert or overwrite an account; used for bootstrap seeding only
    pub async fn insert_with_role(&self, username: &str, password: &str, role: Role) {
        self.accounts.write().await.insert(
            username.to_string(),
            Account { password: password.to_string(), role },
        );
    }

    pub async fn role_of(&self, username: &str) -> Option<Role> {
        self.accounts.read().await.get(username).map(|a| a.role)
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_assigns_user_role() {
        let store = CredentialStore::new();
        store.register("alice", "pw").await.unwrap();

        assert_eq!(store.role_of("alice").await, Some(Role::User));
        assert_eq!(store.verify("alice", "pw").await.unwrap(), Role::User);
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let store = CredentialStore::new();
        store.register("alice", "pw").await.unwrap();

        let err = store.register("alice", "other").await.unwrap_err();
        assert!(matches!(err, CredentialError::AlreadyExists(name) if name == "alice"));
        // original password still wins
        assert!(store.verify("alice", "pw").await.is_ok());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn empty_strings_are_accepted() {
        let store = CredentialStore::new();
        store.register("", "").await.unwrap();
        assert_eq!(store.verify("", "").await.unwrap(), Role::User);
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_are_indistinguishable() {
        let store = CredentialStore::with_demo_accounts();

        let wrong_password = store.verify("admin", "nope").await.unwrap_err();
        let unknown_user = store.verify("ghost", "adminpass").await.unwrap_err();
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn demo_accounts_carry_their_roles() {
        let store = CredentialStore::with_demo_accounts();
        assert_eq!(store.verify("admin", "adminpass").await.unwrap(), Role::Admin);
        assert_eq!(store.verify("user", "userpass").await.unwrap(), Role::User);
    }

    #[tokio::test]
    async fn bootstrap_insert_overwrites() {
        let store = CredentialStore::new();
        store.register("ops", "temp").await.unwrap();
        store.insert_with_role("ops", "s3cret", Role::Admin).await;

        assert!(store.verify("ops", "temp").await.is_err());
        assert_eq!(store.verify("ops", "s3cret").await.unwrap(), Role::Admin);
    }
}
