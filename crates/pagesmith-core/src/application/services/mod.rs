//! Application services - orchestrate use cases.
//!
//! `ExportService` runs an export; the other modules are the pure stages it
//! sequences, plus `ProjectWriter` for callers that persist the result.

pub mod config_files;
pub mod export_service;
pub mod project_writer;
pub mod report;

pub use export_service::ExportService;
pub use project_writer::ProjectWriter;
