//! Application layer for Pagesmith.
//!
//! This layer contains:
//! - **Services**: the export orchestrator and its pure stages
//! - **Ports**: Interface definitions (traits) for backends, progress and I/O
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer; the IR and config rules
//! live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ExportService, ProjectWriter};

// Re-export port traits (for adapter implementation)
pub use ports::{BackendRegistry, Filesystem, ProgressSink, TargetBackend};

pub use error::ApplicationError;
