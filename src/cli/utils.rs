use std::io::Read;

use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::types::ModRecord;

/// Output a success message in the appropriate format
pub fn output_success(output_format: OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(obj)) = (data, response.as_object_mut()) {
                obj.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Print a single record
pub fn output_record(output_format: OutputFormat, record: &ModRecord) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Text => {
            println!("ID: {}", record.id);
            println!("Name: {}", record.name);
            if !record.description.is_empty() {
                println!("Description: {}", record.description);
            }
        }
    }
    Ok(())
}

/// Print a list of records, one line each in text mode
pub fn output_records(output_format: OutputFormat, records: &[ModRecord]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No mods found");
                return Ok(());
            }
            let width = records.iter().map(|r| r.id.len()).max().unwrap_or(2).max(2);
            println!("{:<width$}  NAME", "ID", width = width);
            for record in records {
                println!("{:<width$}  {}", record.id, record.name, width = width);
            }
        }
    }
    Ok(())
}

/// Print an arbitrary JSON value, pretty in JSON mode and key: value lines in text mode
pub fn output_value(output_format: OutputFormat, value: &Value) -> anyhow::Result<()> {
    match (output_format, value) {
        (OutputFormat::Text, Value::Object(map)) => {
            for (key, v) in map {
                match v {
                    Value::String(s) => println!("{}: {}", key, s),
                    other => println!("{}: {}", key, other),
                }
            }
        }
        _ => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Read a mod record as JSON from stdin
pub fn read_record_from_stdin() -> anyhow::Result<ModRecord> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    parse_record(&input)
}

pub fn parse_record(input: &str) -> anyhow::Result<ModRecord> {
    if input.trim().is_empty() {
        anyhow::bail!("Expected a JSON mod record on stdin");
    }
    serde_json::from_str(input).map_err(|e| anyhow::anyhow!("Invalid mod record JSON: {}", e))
}
