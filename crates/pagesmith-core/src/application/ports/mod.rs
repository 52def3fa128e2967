//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `pagesmith-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TargetBackend`: Per-framework code emission
//!   - `BackendRegistry`: Framework → backend lookup
//!   - `ProgressSink`: Progress reporting side channel
//!   - `Filesystem`: File operations for writing an export to disk
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{BackendRegistry, Filesystem, ProgressSink, TargetBackend};

#[cfg(test)]
pub use output::{MockBackendRegistry, MockFilesystem, MockTargetBackend};
