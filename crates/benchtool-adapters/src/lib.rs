//! Tool adapters for a benchmarking harness
//!
//! Each wrapped verifier implements the [`ToolAdapter`] trait: locate the
//! executable, read its version, report a display name and classify a
//! finished run's output into a [`ToolStatus`].
//!
//! # Adapters
//!
//! - **BLAST**: lazy-abstraction model checker for C (`pblast.opt`)
//!
//! ```
//! use benchtool_adapters::{
//!     adapter_for, AdapterSettings, RunResult, ToolAdapter, ToolId, ToolStatus,
//! };
//!
//! let blast = adapter_for(ToolId::Blast, &AdapterSettings::default());
//! let run = RunResult::new(0, "No error found.  The system is safe :-)\n");
//! assert_eq!(blast.status(&run), ToolStatus::Safe);
//! ```

pub mod blast;
pub mod traits;
pub mod util;

pub use blast::{BlastAdapter, BlastConfig};
pub use traits::{
    AdapterSettings, ParseStatusError, ParseToolIdError, RunResult, ToolAdapter, ToolError,
    ToolId, ToolResult, ToolStatus,
};
pub use util::SearchPath;

/// Adapter for `id`, with `settings` layered over its default configuration
pub fn adapter_for(id: ToolId, settings: &AdapterSettings) -> Box<dyn ToolAdapter> {
    match id {
        ToolId::Blast => Box::new(BlastAdapter::with_config(BlastConfig::from(settings))),
    }
}
