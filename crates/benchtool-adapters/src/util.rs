//! Utility functions shared across adapters

use crate::traits::{ToolError, ToolResult};
use std::ffi::OsStr;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Ordered list of directories searched for tool executables.
///
/// Discovery never reads `PATH` implicitly; callers build a `SearchPath`
/// (usually through [`SearchPath::from_env`]) and hand it to the adapter.
///
/// # Examples
///
/// ```
/// use benchtool_adapters::util::SearchPath;
///
/// let search = SearchPath::new(["/usr/local/bin", "/usr/bin"]);
/// assert_eq!(search.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs
                .into_iter()
                .map(Into::into)
                .filter(|dir: &PathBuf| !dir.as_os_str().is_empty())
                .collect(),
        }
    }

    /// Split a `PATH`-style value using the platform separator.
    /// Empty entries are dropped.
    pub fn parse(value: impl AsRef<OsStr>) -> Self {
        Self::new(std::env::split_paths(value.as_ref()))
    }

    /// Search path taken from the process `PATH` variable (empty if unset)
    pub fn from_env() -> Self {
        std::env::var_os("PATH")
            .map(Self::parse)
            .unwrap_or_default()
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// First executable called `name` in directory order.
    ///
    /// Each directory is checked as a single path, so separator characters
    /// inside a directory name are never re-split.
    pub fn find(&self, name: &str) -> ToolResult<PathBuf> {
        for dir in &self.dirs {
            let candidate = dir.join(name);
            trace!("probing {}", candidate.display());
            if let Ok(path) = which::which(&candidate) {
                return Ok(path);
            }
        }
        Err(ToolError::not_found(name, self.dirs.len()))
    }
}

/// Take `range` out of raw process output, clamped to the available bytes.
///
/// Never panics: a banner shorter than the range yields a shorter (possibly
/// empty) string. Invalid UTF-8 is replaced lossily.
#[must_use]
pub fn banner_slice(bytes: &[u8], range: Range<usize>) -> String {
    let end = range.end.min(bytes.len());
    let start = range.start.min(end);
    String::from_utf8_lossy(&bytes[start..end]).into_owned()
}

/// Display helper for optional paths in log lines
pub(crate) fn display_or_none(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "<none>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_slice_in_range() {
        assert_eq!(banner_slice(b"BLAST 2.5 (pblast)", 6..9), "2.5");
    }

    #[test]
    fn test_banner_slice_short_input() {
        assert_eq!(banner_slice(b"BLAST 2", 6..9), "2");
        assert_eq!(banner_slice(b"BLAST", 6..9), "");
        assert_eq!(banner_slice(b"", 6..9), "");
    }

    #[test]
    fn test_banner_slice_invalid_utf8() {
        let bytes = [b'x', b'x', b'x', b'x', b'x', b'x', 0xff, b'1', b'2'];
        let slice = banner_slice(&bytes, 6..9);
        assert!(slice.ends_with("12"));
    }

    #[test]
    fn test_search_path_drops_empty_entries() {
        let search = SearchPath::new(["", "/usr/bin", ""]);
        assert_eq!(search.dirs(), &[PathBuf::from("/usr/bin")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_search_path_parse_unix_separator() {
        let search = SearchPath::parse("/a:/b::/c");
        assert_eq!(
            search.dirs(),
            &[PathBuf::from("/a"), PathBuf::from("/b"), PathBuf::from("/c")]
        );
    }

    #[test]
    fn test_find_on_empty_search_path() {
        let err = SearchPath::default().find("pblast.opt").unwrap_err();
        assert!(matches!(err, ToolError::NotFound { searched: 0, .. }));
    }

    #[test]
    fn test_find_missing_binary() {
        let dir = tempfile::tempdir().unwrap();
        let search = SearchPath::new([dir.path()]);
        let err = search.find("definitely-not-a-real-tool").unwrap_err();
        assert!(matches!(err, ToolError::NotFound { searched: 1, .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_respects_directory_order() {
        use std::os::unix::fs::PermissionsExt;

        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        for dir in [first.path(), second.path()] {
            let exe = dir.join("tool");
            std::fs::write(&exe, "#!/bin/sh\n").unwrap();
            std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let search = SearchPath::new([second.path(), first.path()]);
        let found = search.find("tool").unwrap();
        assert!(found.starts_with(second.path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_skips_non_executable_files() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("tool");
        std::fs::write(&exe, "not a program").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o644)).unwrap();

        let search = SearchPath::new([dir.path()]);
        assert!(search.find("tool").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_in_directory_with_separator_in_name() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("blast:2.5");
        std::fs::create_dir(&dir).unwrap();
        let exe = dir.join("tool");
        std::fs::write(&exe, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let search = SearchPath::new([&dir]);
        assert_eq!(search.len(), 1);
        assert_eq!(search.find("tool").unwrap(), exe);
    }

    #[test]
    fn test_display_or_none() {
        assert_eq!(display_or_none(None), "<none>");
        assert_eq!(display_or_none(Some(Path::new("/x"))), "/x");
    }
}
