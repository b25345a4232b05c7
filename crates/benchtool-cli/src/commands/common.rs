//! Common utilities shared across CLI commands

use anyhow::Result;
use benchtool_adapters::{adapter_for, AdapterSettings, SearchPath, ToolAdapter, ToolId};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Adapter selection and discovery settings shared by every command
#[derive(Debug, Clone)]
pub struct ToolOptions {
    pub tool: ToolId,
    pub tool_path: Option<PathBuf>,
    /// `PATH`-style list; falls back to the process `PATH` when absent
    pub search_path: Option<String>,
    pub version_timeout: Duration,
    pub json: bool,
}

impl ToolOptions {
    pub fn adapter(&self) -> Box<dyn ToolAdapter> {
        let settings = AdapterSettings {
            tool_path: self.tool_path.clone(),
            version_timeout: Some(self.version_timeout),
        };
        adapter_for(self.tool, &settings)
    }

    pub fn search_path(&self) -> SearchPath {
        let search = match &self.search_path {
            Some(value) => SearchPath::parse(value),
            None => SearchPath::from_env(),
        };
        debug!("Search path: {:?}", search.dirs());
        search
    }

    /// Explicit executable if given, otherwise resolve through the adapter
    pub fn resolve_executable(
        &self,
        adapter: &dyn ToolAdapter,
        explicit: Option<PathBuf>,
    ) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path),
            None => Ok(adapter.executable(&self.search_path())?),
        }
    }
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
