//! Core adapter trait and the value types shared by every tool adapter
//!
//! A benchmarking harness drives each wrapped verifier through the same four
//! operations: find the binary, ask it for a version, name it, and turn a
//! finished run into a [`ToolStatus`]. Everything else (spawning benchmark
//! runs, enforcing time limits, storing results) stays with the harness.

use crate::util::SearchPath;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Result type for adapter operations
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors an adapter can report to the harness
///
/// Unrecognized tool output is never an error; it classifies as
/// [`ToolStatus::Unknown`].
#[derive(Debug, Error)]
pub enum ToolError {
    /// The binary is not present in any searched directory
    #[error("{name} not found ({searched} directories searched)")]
    NotFound { name: String, searched: usize },

    /// The binary exists but could not be started
    #[error("failed to execute {}: {message}", path.display())]
    Spawn { path: PathBuf, message: String },

    /// The version query did not finish in time
    #[error("version query timed out after {0:?}")]
    Timeout(Duration),

    /// Setting up or reading the capture pipe failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    pub fn not_found(name: impl Into<String>, searched: usize) -> Self {
        ToolError::NotFound {
            name: name.into(),
            searched,
        }
    }

    pub fn spawn(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ToolError::Spawn {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error means the tool is simply not installed
    pub fn is_not_found(&self) -> bool {
        matches!(self, ToolError::NotFound { .. })
    }
}

/// Verdict label for a single benchmark run
///
/// The serialized form is the exact label the harness reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolStatus {
    /// The tool found a property violation
    #[serde(rename = "UNSAFE")]
    Unsafe,
    /// The tool proved the program safe
    #[serde(rename = "SAFE")]
    Safe,
    /// The tool ran out of memory
    #[serde(rename = "OUT OF MEMORY")]
    OutOfMemory,
    /// The tool died with an internal exception
    #[serde(rename = "EXCEPTION")]
    Exception,
    /// The tool reported being cut off
    #[serde(rename = "TIMEOUT")]
    Timeout,
    /// No recognizable verdict in the output
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl ToolStatus {
    /// Every label, in rule order with `Unknown` last
    pub const ALL: [ToolStatus; 6] = [
        ToolStatus::Unsafe,
        ToolStatus::Safe,
        ToolStatus::OutOfMemory,
        ToolStatus::Exception,
        ToolStatus::Timeout,
        ToolStatus::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unsafe => "UNSAFE",
            Self::Safe => "SAFE",
            Self::OutOfMemory => "OUT OF MEMORY",
            Self::Exception => "EXCEPTION",
            Self::Timeout => "TIMEOUT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a label that is not one of [`ToolStatus::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status label: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for ToolStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Raw facts about a finished run, as collected by the harness
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    /// Process exit code
    pub exit_code: i32,
    /// Signal that terminated the process, if any
    pub exit_signal: Option<i32>,
    /// Combined stdout and stderr text
    pub output: String,
    /// Whether the harness killed the run for exceeding its time budget
    pub is_timeout: bool,
}

impl RunResult {
    pub fn new(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            exit_signal: None,
            output: output.into(),
            is_timeout: false,
        }
    }

    pub fn with_signal(mut self, signal: i32) -> Self {
        self.exit_signal = Some(signal);
        self
    }

    pub fn timed_out(mut self, is_timeout: bool) -> Self {
        self.is_timeout = is_timeout;
        self
    }
}

/// Identifier for each wrapped tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Blast,
}

impl ToolId {
    pub const ALL: [ToolId; 1] = [ToolId::Blast];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blast => "blast",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool: {0:?}")]
pub struct ParseToolIdError(pub String);

impl FromStr for ToolId {
    type Err = ParseToolIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == lower)
            .ok_or_else(|| ParseToolIdError(s.to_string()))
    }
}

/// Tool-independent settings a harness can apply to any adapter
#[derive(Debug, Clone, Default)]
pub struct AdapterSettings {
    /// Explicit executable, used instead of searching
    pub tool_path: Option<PathBuf>,
    /// Overrides the adapter's default version query timeout
    pub version_timeout: Option<Duration>,
}

/// Capability set every tool adapter exposes to the harness
#[async_trait]
pub trait ToolAdapter: Send + Sync {
    /// Which tool this adapter wraps
    fn id(&self) -> ToolId;

    /// Human-readable tool name for reports
    fn name(&self) -> &'static str;

    /// Resolve the tool's executable using the given search path
    fn executable(&self, search_path: &SearchPath) -> ToolResult<PathBuf>;

    /// Run the executable briefly and extract its version identifier
    async fn version(&self, executable: &Path) -> ToolResult<String>;

    /// Classify a finished run. Total: never fails, never panics.
    fn status(&self, run: &RunResult) -> ToolStatus;

    /// Command line for a benchmark run: executable, then options, then the
    /// source file.
    fn command_line(
        &self,
        executable: &Path,
        options: &[String],
        source_file: &Path,
    ) -> Vec<OsString> {
        let mut cmdline = Vec::with_capacity(options.len() + 2);
        cmdline.push(executable.as_os_str().to_os_string());
        cmdline.extend(options.iter().map(OsString::from));
        cmdline.push(source_file.as_os_str().to_os_string());
        cmdline
    }
}
