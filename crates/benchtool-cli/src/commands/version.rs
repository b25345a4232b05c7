//! Version command implementation

use super::common::{print_json, ToolOptions};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for the version command
#[derive(Debug, Clone, Default)]
pub struct VersionConfig {
    /// Executable to query; resolved through the adapter when absent
    pub executable: Option<PathBuf>,
}

#[derive(Serialize)]
struct VersionReport {
    tool: String,
    name: &'static str,
    executable: PathBuf,
    version: String,
}

/// Print the tool's version identifier
pub async fn run_version(options: &ToolOptions, config: VersionConfig) -> Result<()> {
    let adapter = options.adapter();
    let executable = options.resolve_executable(adapter.as_ref(), config.executable)?;
    let version = adapter
        .version(&executable)
        .await
        .with_context(|| format!("cannot query {} version", adapter.name()))?;

    if options.json {
        print_json(&VersionReport {
            tool: adapter.id().to_string(),
            name: adapter.name(),
            executable,
            version,
        })
    } else {
        println!("{} {}", adapter.name(), version);
        Ok(())
    }
}
