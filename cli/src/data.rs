use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use tilechart_core::StatusRecord;

/// Loads caller records from a JSON file, `-` for stdin, or piped stdin when
/// no path is given. An interactive stdin with no path means no data.
pub fn load_records(path: Option<&Path>) -> Result<Vec<StatusRecord>> {
    let content = match path {
        Some(p) if p == Path::new("-") => read_stdin()?,
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("Failed to read data file {}", p.display()))?,
        None if !io::stdin().is_terminal() => read_stdin()?,
        None => String::new(),
    };

    let records = parse_records(&content)?;
    info!("Loaded {} records", records.len());
    Ok(records)
}

pub fn parse_records(content: &str) -> Result<Vec<StatusRecord>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(content).context("Data must be a JSON array of {date, status} objects")
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read data from stdin")?;
    Ok(buf)
}
