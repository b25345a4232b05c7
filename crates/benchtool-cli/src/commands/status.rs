//! Status command implementation
//!
//! Classifies the saved output of a run the harness already executed.

use super::common::{print_json, ToolOptions};
use anyhow::{Context, Result};
use benchtool_adapters::{RunResult, ToolStatus};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Configuration for the status command
#[derive(Debug, Clone, Default)]
pub struct StatusConfig {
    pub exit_code: i32,
    pub exit_signal: Option<i32>,
    pub timed_out: bool,
    /// Output file; stdin when absent or `-`
    pub input: Option<PathBuf>,
}

#[derive(Serialize)]
struct StatusReport {
    tool: String,
    name: &'static str,
    exit_code: i32,
    exit_signal: Option<i32>,
    timed_out: bool,
    status: ToolStatus,
}

async fn read_output(input: Option<&PathBuf>) -> Result<String> {
    let bytes = match input {
        Some(path) if path.as_os_str() != "-" => tokio::fs::read(path)
            .await
            .with_context(|| format!("cannot read {}", path.display()))?,
        _ => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("cannot read stdin")?;
            buf
        }
    };
    // tool output is not guaranteed to be UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Print the status label for a finished run
pub async fn run_status(options: &ToolOptions, config: StatusConfig) -> Result<()> {
    let adapter = options.adapter();
    let output = read_output(config.input.as_ref()).await?;

    let mut run = RunResult::new(config.exit_code, output).timed_out(config.timed_out);
    if let Some(signal) = config.exit_signal {
        run = run.with_signal(signal);
    }
    let status = adapter.status(&run);

    if options.json {
        print_json(&StatusReport {
            tool: adapter.id().to_string(),
            name: adapter.name(),
            exit_code: config.exit_code,
            exit_signal: config.exit_signal,
            timed_out: config.timed_out,
            status,
        })
    } else {
        println!("{}", status);
        Ok(())
    }
}
