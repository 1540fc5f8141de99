use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Token saved by `modctl auth login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub server: String,
    pub username: String,
    pub role: Option<Role>,
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

impl SessionInfo {
    pub fn new(server: String, username: String, token: String) -> Self {
        Self {
            server,
            username,
            role: None,
            token,
            issued_at: Utc::now(),
        }
    }
}

pub fn get_config_dir() -> anyhow::Result<PathBuf> {
    let config_dir = if let Ok(custom_dir) = std::env::var("MOD_CLI_CONFIG_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = std::env::var("HOME").map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("mod-api").join("cli")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

fn session_file() -> anyhow::Result<PathBuf> {
    Ok(get_config_dir()?.join("session.json"))
}

pub fn load_session() -> anyhow::Result<Option<SessionInfo>> {
    let path = session_file()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let session: SessionInfo = serde_json::from_str(&content)?;
    Ok(Some(session))
}

pub fn save_session(session: &SessionInfo) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(session)?;
    fs::write(session_file()?, content)?;
    Ok(())
}

/// Returns true if a session file was removed
pub fn clear_session() -> anyhow::Result<bool> {
    let path = session_file()?;
    if path.exists() {
        fs::remove_file(path)?;
        return Ok(true);
    }
    Ok(false)
}

/// Saved token, or an error telling the user to log in first
pub fn require_token() -> anyhow::Result<String> {
    load_session()?
        .map(|s| s.token)
        .ok_or_else(|| anyhow::anyhow!("Not logged in. Run `modctl auth login <username>` first"))
}
