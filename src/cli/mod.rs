pub mod client;
pub mod commands;
pub mod config;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "modctl")]
#[command(about = "modctl - Command-line client for the Mod API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "MOD_API_URL",
        default_value = "http://127.0.0.1:3000",
        help = "Base URL of the Mod API server"
    )]
    pub url: String,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Registration, login and session management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Mod collection operations")]
    Mods {
        #[command(subcommand)]
        cmd: commands::mods::ModsCommands,
    },

    #[command(about = "Server health and information")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, &cli.url, output_format).await,
        Commands::Mods { cmd } => commands::mods::handle(cmd, &cli.url, output_format).await,
        Commands::Server { cmd } => commands::server::handle(cmd, &cli.url, output_format).await,
    }
}
