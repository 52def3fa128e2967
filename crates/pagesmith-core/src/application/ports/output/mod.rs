//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the export engine needs from the outside.
//! The `pagesmith-adapters` crate provides implementations.

use std::path::Path;
use std::sync::Arc;

use crate::domain::{ComponentNode, ExportConfig, Framework, GeneratedFile};
use crate::error::PagesmithResult;

/// Port for one target framework's code emitter.
///
/// Implemented by:
/// - `pagesmith_adapters::backends::ReactBackend`
/// - `pagesmith_adapters::backends::VueBackend`
/// - `pagesmith_adapters::backends::SvelteBackend`
/// - `pagesmith_adapters::backends::AngularBackend`
/// - `pagesmith_adapters::backends::HtmlBackend`
///
/// ## Contract
///
/// - One primary file per component node, named after its PascalCase type
/// - Exactly one application shell and one entry point
/// - Fails the whole call on a cyclic id; never returns a partial list
/// - Never mutates `nodes`
#[cfg_attr(test, mockall::automock)]
pub trait TargetBackend: Send + Sync {
    /// The framework this backend emits.
    fn framework(&self) -> Framework;

    /// Emit every component, shell, entry, style and test file.
    fn generate(
        &self,
        nodes: &[ComponentNode],
        config: &ExportConfig,
    ) -> PagesmithResult<Vec<GeneratedFile>>;
}

/// Port for framework → backend lookup.
///
/// Implemented by:
/// - `pagesmith_adapters::registry::InMemoryBackendRegistry`
#[cfg_attr(test, mockall::automock)]
pub trait BackendRegistry: Send + Sync {
    /// Find the backend for a framework. `Ok(None)` when none is registered.
    fn get(&self, framework: Framework) -> PagesmithResult<Option<Arc<dyn TargetBackend>>>;

    /// Register or replace the backend for its framework.
    fn register(&self, backend: Arc<dyn TargetBackend>) -> PagesmithResult<()>;

    /// All frameworks with a registered backend, sorted.
    fn frameworks(&self) -> PagesmithResult<Vec<Framework>>;
}

/// Progress side channel for a running export.
///
/// Fire-and-forget: implementations must not block and must swallow their
/// own failures. Any `Fn(u8, &str)` closure is a sink.
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u8, message: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(u8, &str) + Send + Sync,
{
    fn report(&self, percent: u8, message: &str) {
        self(percent, message)
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pagesmith_adapters::filesystem::LocalFilesystem` (production)
/// - `pagesmith_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PagesmithResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> PagesmithResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> PagesmithResult<()>;
}
