use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::config::require_token;
use crate::cli::utils::{output_record, output_records, output_success, read_record_from_stdin};
use crate::cli::OutputFormat;
use crate::types::ModRecord;

#[derive(Subcommand)]
pub enum ModsCommands {
    #[command(about = "List every mod")]
    List,

    #[command(about = "Show a single mod")]
    Get {
        #[arg(help = "Mod ID")]
        id: String,
    },

    #[command(about = "Create mod from JSON on stdin (admin)")]
    Create,

    #[command(about = "Replace mod with JSON from stdin (admin)")]
    Update {
        #[arg(help = "Mod ID to update")]
        id: String,
    },

    #[command(about = "Delete mod (admin)")]
    Delete {
        #[arg(help = "Mod ID to delete")]
        id: String,
    },
}

pub async fn handle(cmd: ModsCommands, server: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new(server)?.with_token(require_token()?);

    match cmd {
        ModsCommands::List => {
            let records: Vec<ModRecord> = serde_json::from_value(client.get("mods").await?)?;
            output_records(output_format, &records)
        }
        ModsCommands::Get { id } => {
            let path = ApiClient::path(&["mods", id.as_str()])?;
            let record: ModRecord = serde_json::from_value(client.get(&path).await?)?;
            output_record(output_format, &record)
        }
        ModsCommands::Create => {
            let record = read_record_from_stdin()?;
            let created: ModRecord = serde_json::from_value(client.post("mods", &record).await?)?;
            output_record(output_format, &created)
        }
        ModsCommands::Update { id } => {
            let mut record = read_record_from_stdin()?;
            // the server stores the body verbatim, so keep the id unless stdin overrides it
            if record.id.is_empty() {
                record.id = id.clone();
            }
            let updated: ModRecord =
                serde_json::from_value(client.put(&ApiClient::path(&["mods", id.as_str()])?, &record).await?)?;
            output_record(output_format, &updated)
        }
        ModsCommands::Delete { id } => {
            client.delete(&ApiClient::path(&["mods", id.as_str()])?).await?;
            output_success(output_format, &format!("Mod '{}' deleted", id), Some(json!({ "id": id })))
        }
    }
}
