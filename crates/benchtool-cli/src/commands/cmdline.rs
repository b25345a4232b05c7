//! Cmdline command implementation

use super::common::{print_json, ToolOptions};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for the cmdline command
#[derive(Debug, Clone, Default)]
pub struct CmdlineConfig {
    pub executable: Option<PathBuf>,
    pub source_file: PathBuf,
    pub options: Vec<String>,
}

/// Print the command line the harness should run for one source file
pub fn run_cmdline(options: &ToolOptions, config: CmdlineConfig) -> Result<()> {
    let adapter = options.adapter();
    let executable = options.resolve_executable(adapter.as_ref(), config.executable)?;
    let cmdline: Vec<String> = adapter
        .command_line(&executable, &config.options, &config.source_file)
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    if options.json {
        print_json(&cmdline)
    } else {
        println!("{}", cmdline.join(" "));
        Ok(())
    }
}
