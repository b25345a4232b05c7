//! BLAST installation detection and version query

use super::config::{BlastConfig, VERSION_RANGE};
use crate::traits::{ToolError, ToolResult};
use crate::util::{banner_slice, display_or_none, SearchPath};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Locate the BLAST binary: configured path first, then the search path
pub fn locate_blast(config: &BlastConfig, search_path: &SearchPath) -> ToolResult<PathBuf> {
    debug!(
        "Locating {} (override: {}, {} search dirs)",
        config.binary_name,
        display_or_none(config.blast_path.as_deref()),
        search_path.len()
    );

    if let Some(path) = &config.blast_path {
        return Ok(path.clone());
    }

    let path = search_path.find(&config.binary_name)?;
    debug!("Found BLAST at {}", path.display());
    Ok(path)
}

/// Run BLAST without arguments and slice the version out of its banner.
///
/// stdout and stderr share one pipe, so the captured text keeps the order
/// the tool wrote it in. The banner is not parsed: bytes 6..9 are returned
/// as-is, shorter if the banner is shorter. A non-zero exit status is
/// expected and ignored.
pub async fn query_version(config: &BlastConfig, executable: &Path) -> ToolResult<String> {
    let (mut reader, writer) = os_pipe::pipe()?;

    let mut child = {
        let mut cmd = Command::new(executable);
        cmd.stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer)
            .kill_on_drop(true);
        cmd.spawn()
            .map_err(|e| ToolError::spawn(executable, e.to_string()))?
        // `cmd` drops here and closes our copies of the write end
    };

    let read_banner = tokio::task::spawn_blocking(move || {
        let mut banner = Vec::new();
        reader.read_to_end(&mut banner).map(|_| banner)
    });

    let (banner, status) = tokio::time::timeout(config.version_timeout, async {
        let banner = read_banner.await.map_err(io::Error::from)??;
        let status = child.wait().await?;
        Ok::<_, ToolError>((banner, status))
    })
    .await
    .map_err(|_| ToolError::Timeout(config.version_timeout))??;

    debug!(
        "BLAST banner ({}): {}",
        status,
        String::from_utf8_lossy(&banner).trim()
    );

    Ok(banner_slice(&banner, VERSION_RANGE))
}
