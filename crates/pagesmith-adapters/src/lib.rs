//! Infrastructure adapters for Pagesmith.
//!
//! This crate implements the ports defined in `pagesmith-core::application::ports`:
//! the per-framework target backends, the backend registry, progress sinks
//! and filesystems.

pub mod backends;
pub mod filesystem;
pub mod generator;
pub mod progress;
pub mod registry;

// Re-export commonly used adapters
pub use backends::{AngularBackend, HtmlBackend, ReactBackend, SvelteBackend, VueBackend};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use progress::{ChannelProgress, ProgressEvent, TracingProgress};
pub use registry::InMemoryBackendRegistry;
