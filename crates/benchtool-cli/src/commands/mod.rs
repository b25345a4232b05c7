//! CLI command implementations
//!
//! Each command is in its own module.

pub mod cmdline;
pub mod common;
pub mod locate;
pub mod status;
pub mod version;

pub use cmdline::{run_cmdline, CmdlineConfig};
pub use common::ToolOptions;
pub use locate::run_locate;
pub use status::{run_status, StatusConfig};
pub use version::{run_version, VersionConfig};
