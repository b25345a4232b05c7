//! Configuration types for the BLAST adapter

use crate::traits::AdapterSettings;
use std::path::PathBuf;
use std::time::Duration;

/// Binary name BLAST installs
pub const BLAST_BINARY: &str = "pblast.opt";

/// Byte range of the version number in the BLAST banner
pub const VERSION_RANGE: std::ops::Range<usize> = 6..9;

/// Configuration for the BLAST adapter
#[derive(Debug, Clone)]
pub struct BlastConfig {
    /// Explicit path to the BLAST binary, checked before the search path
    pub blast_path: Option<PathBuf>,
    /// Binary name looked up on the search path
    pub binary_name: String,
    /// Upper bound for the banner invocation used by the version query
    pub version_timeout: Duration,
}

impl Default for BlastConfig {
    fn default() -> Self {
        Self {
            blast_path: None,
            binary_name: BLAST_BINARY.to_string(),
            version_timeout: Duration::from_secs(10),
        }
    }
}

impl From<&AdapterSettings> for BlastConfig {
    fn from(settings: &AdapterSettings) -> Self {
        let defaults = Self::default();
        Self {
            blast_path: settings.tool_path.clone(),
            version_timeout: settings
                .version_timeout
                .unwrap_or(defaults.version_timeout),
            ..defaults
        }
    }
}
