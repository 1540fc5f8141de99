use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};

use crate::auth::{CredentialStore, TokenService};
use crate::config::{AppConfig, ConfigError};
use crate::store::{demo_records, RecordStore};
use crate::types::Role;

/// Everything a handler needs, built once at startup and shared through axum `State`
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub credentials: Arc<CredentialStore>,
    pub records: Arc<RecordStore>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        credentials: CredentialStore,
        records: RecordStore,
        tokens: TokenService,
    ) -> Self {
        Self {
            config: Arc::new(config),
            credentials: Arc::new(credentials),
            records: Arc::new(records),
            tokens: Arc::new(tokens),
        }
    }

    /// Validate the configuration and build seeded stores from it
    pub async fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        if config.uses_development_secret() {
            warn!("Signing tokens with the development-only secret; set JWT_SECRET to replace it");
        }

        let ttl_secs = i64::try_from(config.security.token_ttl_secs)
            .map_err(|_| ConfigError::TokenTtlTooLarge(config.security.token_ttl_secs))?;
        let tokens = TokenService::new(&config.security.jwt_secret, Duration::seconds(ttl_secs));

        let (credentials, records) = if config.seed.demo_data {
            (CredentialStore::with_demo_accounts(), RecordStore::with_records(demo_records()))
        } else {
            (CredentialStore::new(), RecordStore::new())
        };

        if let Some((username, password)) = config.bootstrap_admin() {
            credentials.insert_with_role(username, password, Role::Admin).await;
            info!("Bootstrap admin '{}' installed", username);
        }

        info!(
            "State ready: {} account(s), {} mod(s), token TTL {}s",
            credentials.len().await,
            records.len().await,
            config.security.token_ttl_secs
        );

        Ok(Self::new(config, credentials, records, tokens))
    }
}
