use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::client::ApiClient;
use crate::cli::config::{clear_session, load_session, require_token, save_session, SessionInfo};
use crate::cli::utils::{output_success, output_value};
use crate::cli::OutputFormat;
use crate::types::{Credentials, Role};

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Register new user (role: user)")]
    Register {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, env = "MOD_CLI_PASSWORD", hide_env_values = true, help = "Password")]
        password: String,
    },

    #[command(about = "Login and save the session token")]
    Login {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, env = "MOD_CLI_PASSWORD", hide_env_values = true, help = "Password")]
        password: String,
    },

    #[command(about = "Forget the saved session token")]
    Logout,

    #[command(about = "Show saved session details")]
    Status,

    #[command(about = "Ask the server who the saved token belongs to")]
    Whoami,
}

pub async fn handle(cmd: AuthCommands, server: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Register { username, password } => {
            let client = ApiClient::new(server)?;
            client.post("register", &Credentials { username: username.clone(), password }).await?;
            output_success(
                output_format,
                &format!("User '{}' registered", username),
                Some(json!({ "username": username })),
            )
        }
        AuthCommands::Login { username, password } => {
            let client = ApiClient::new(server)?;
            let response = client
                .post("login", &Credentials { username: username.clone(), password })
                .await?;

            let token = response
                .get("token")
                .and_then(Value::as_str)
                .ok_or_else(|| anyhow::anyhow!("Login response did not contain a token"))?
                .to_string();

            let mut session = SessionInfo::new(server.to_string(), username.clone(), token.clone());
            // Best effort: record the role the server resolved for this token
            if let Ok(me) = ApiClient::new(server)?.with_token(token).get("whoami").await {
                session.role = me.get("role").cloned().and_then(|r| serde_json::from_value::<Role>(r).ok());
            }
            save_session(&session)?;

            output_success(
                output_format,
                &format!("Logged in as '{}'", username),
                Some(json!({ "username": username, "role": session.role })),
            )
        }
        AuthCommands::Logout => {
            let removed = clear_session()?;
            let message = if removed { "Logged out" } else { "No saved session" };
            output_success(output_format, message, None)
        }
        AuthCommands::Status => match load_session()? {
            Some(session) => output_value(
                output_format,
                &json!({
                    "server": session.server,
                    "username": session.username,
                    "role": session.role,
                    "issued_at": session.issued_at,
                }),
            ),
            None => output_success(output_format, "Not logged in", Some(json!({ "logged_in": false }))),
        },
        AuthCommands::Whoami => {
            let client = ApiClient::new(server)?.with_token(require_token()?);
            let me = client.get("whoami").await?;
            output_value(output_format, &me)
        }
    }
}
