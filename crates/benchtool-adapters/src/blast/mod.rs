//! BLAST model checker adapter
//!
//! BLAST (Berkeley Lazy Abstraction Software verification Tool) checks
//! reachability properties of C programs. The harness runs `pblast.opt`
//! itself; this adapter only finds the binary, reads its version off the
//! startup banner and turns the finished run's output into a verdict.
//!
//! # Output conventions
//!
//! - `Error found! The system is unsafe :-(` → `UNSAFE`
//! - `No error found.  The system is safe :-)` → `SAFE`
//! - with exit code 2:
//!   - `Fatal error: out of memory.` → `OUT OF MEMORY`
//!   - `Fatal error: exception Sys_error("Broken pipe")` → `EXCEPTION`
//!   - `Ack! The gremlins again!: Sys_error("Broken pipe")` → `TIMEOUT`

mod config;
mod detection;
mod parsing;


pub use config::{BlastConfig, BLAST_BINARY, VERSION_RANGE};
pub use parsing::classify;

use crate::traits::{RunResult, ToolAdapter, ToolId, ToolResult, ToolStatus};
use crate::util::SearchPath;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Display name reported for BLAST
pub const NAME: &str = "BLAST";

/// BLAST tool adapter
pub struct BlastAdapter {
    config: BlastConfig,
}

impl Default for BlastAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl BlastAdapter {
    /// Create adapter with default configuration
    pub fn new() -> Self {
        Self {
            config: BlastConfig::default(),
        }
    }

    /// Create adapter with custom configuration
    pub fn with_config(config: BlastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BlastConfig {
        &self.config
    }
}

#[async_trait]
impl ToolAdapter for BlastAdapter {
    fn id(&self) -> ToolId {
        ToolId::Blast
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn executable(&self, search_path: &SearchPath) -> ToolResult<PathBuf> {
        detection::locate_blast(&self.config, search_path)
    }

    async fn version(&self, executable: &Path) -> ToolResult<String> {
        detection::query_version(&self.config, executable).await
    }

    fn status(&self, run: &RunResult) -> ToolStatus {
        let status = parsing::classify(
            run.exit_code,
            run.exit_signal,
            &run.output,
            run.is_timeout,
        );
        debug!(
            "BLAST run (exit code {}, signal {:?}) classified as {}",
            run.exit_code, run.exit_signal, status
        );
        status
    }
}
