use clap::Subcommand;

use crate::cli::client::ApiClient;
use crate::cli::utils::output_value;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Check server health status from API /health endpoint")]
    Health,

    #[command(about = "Show server information from API root endpoint")]
    Info,
}

pub async fn handle(cmd: ServerCommands, server: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new(server)?;

    match cmd {
        ServerCommands::Health => output_value(output_format, &client.get("health").await?),
        ServerCommands::Info => output_value(output_format, &client.get("").await?),
    }
}
