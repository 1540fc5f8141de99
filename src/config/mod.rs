use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// HMAC-SHA256 signing secret shared by every token issued by this process
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Seed the three demo mods plus the `admin`/`user` demo accounts
    pub demo_data: bool,
    pub admin_username: Option<String>,
    #[serde(skip_serializing)]
    pub admin_password: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in {0:?} mode")]
    MissingJwtSecret(Environment),

    #[error("token TTL must be greater than zero")]
    ZeroTokenTtl,

    #[error("token TTL of {0}s exceeds the maximum of {max}s", max = MAX_TOKEN_TTL_SECS)]
    TokenTtlTooLarge(u64),

    #[error("SEED_ADMIN_USERNAME and SEED_ADMIN_PASSWORD must be set together")]
    IncompleteAdminSeed,
}

/// Secret used when a development build starts without JWT_SECRET
const DEVELOPMENT_JWT_SECRET: &str = "development-only-secret";

/// Upper bound on token lifetime (30 days)
pub const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Some(port) = env::var("MOD_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // API overrides
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }

        // Security overrides
        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("SECURITY_TOKEN_TTL_SECS") {
            self.security.token_ttl_secs = v.parse().unwrap_or(self.security.token_ttl_secs);
        }
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Seed overrides
        if let Ok(v) = env::var("SEED_DEMO_DATA") {
            self.seed.demo_data = v.parse().unwrap_or(self.seed.demo_data);
        }
        if let Ok(v) = env::var("SEED_ADMIN_USERNAME") {
            self.seed.admin_username = Some(v);
        }
        if let Ok(v) = env::var("SEED_ADMIN_PASSWORD") {
            self.seed.admin_password = Some(v);
        }

        self
    }

    /// Reject configurations the server must not start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.security.jwt_secret.is_empty() {
            return Err(ConfigError::MissingJwtSecret(self.environment));
        }
        if self.security.token_ttl_secs == 0 {
            return Err(ConfigError::ZeroTokenTtl);
        }
        if self.security.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::TokenTtlTooLarge(self.security.token_ttl_secs));
        }
        if self.seed.admin_username.is_some() != self.seed.admin_password.is_some() {
            return Err(ConfigError::IncompleteAdminSeed);
        }
        Ok(())
    }

    /// Credentials for the bootstrap admin, if both halves are configured
    pub fn bootstrap_admin(&self) -> Option<(&str, &str)> {
        match (&self.seed.admin_username, &self.seed.admin_password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }

    /// True when tokens would be signed with the built-in development secret
    pub fn uses_development_secret(&self) -> bool {
        self.security.jwt_secret == DEVELOPMENT_JWT_SECRET
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn is_development(&self) -> bool {
        matches!(self.environment, Environment::Development)
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            api: ApiConfig {
                enable_request_logging: true,
            },
            security: SecurityConfig {
                jwt_secret: DEVELOPMENT_JWT_SECRET.to_string(),
                token_ttl_secs: 5 * 60,
                enable_cors: true,
                cors_origins: vec!["http://localhost:3000".to_string(), "http://localhost:5173".to_string()],
            },
            seed: SeedConfig {
                demo_data: true,
                admin_username: None,
                admin_password: None,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            api: ApiConfig {
                enable_request_logging: true,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                token_ttl_secs: 5 * 60,
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
            seed: SeedConfig {
                demo_data: false,
                admin_username: None,
                admin_password: None,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            api: ApiConfig {
                enable_request_logging: false,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                token_ttl_secs: 5 * 60,
                enable_cors: false,
                cors_origins: Vec::new(),
            },
            seed: SeedConfig {
                demo_data: false,
                admin_username: None,
                admin_password: None,
            },
        }
    }

    /// Fixed configuration for in-process tests: no env lookups, demo data seeded
    pub fn for_tests(jwt_secret: &str) -> Self {
        let mut config = Self::development();
        config.security.jwt_secret = jwt_secret.to_string();
        config.api.enable_request_logging = false;
        config
    }
}
