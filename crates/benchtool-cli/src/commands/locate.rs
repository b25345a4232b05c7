//! Locate command implementation

use super::common::{print_json, ToolOptions};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct LocateReport {
    tool: String,
    name: &'static str,
    executable: PathBuf,
}

/// Print the resolved executable path
pub fn run_locate(options: &ToolOptions) -> Result<()> {
    let adapter = options.adapter();
    let executable = adapter
        .executable(&options.search_path())
        .with_context(|| format!("cannot locate {}", adapter.name()))?;

    if options.json {
        print_json(&LocateReport {
            tool: adapter.id().to_string(),
            name: adapter.name(),
            executable,
        })
    } else {
        println!("{}", executable.display());
        Ok(())
    }
}
