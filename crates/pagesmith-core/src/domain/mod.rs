//! Core domain layer for Pagesmith.
//!
//! This module contains the pure export model: the component IR, the export
//! configuration, the capability registry, and the dependency resolver.
//! Code emission for each framework lives behind the `TargetBackend` port.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: `tracing` is an application-layer concern
//! - **Immutable inputs**: The IR and config are never mutated by generation
//! - **Value crates only**: serde, indexmap and chrono model data, nothing else

pub mod capabilities;
pub mod dependencies;
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    common::RelativePath,
    component::{ComponentNode, ComponentStyles, SeoData, Walk},
    config::{DEFAULT_PROJECT_NAME, ExportConfig, ExportConfigBuilder, HasFramework, NoFramework},
    generated::GeneratedFile,
    result::{
        AccessibilityReport, CoreWebVitals, ExportMetadata, ExportResult, MetaTagAnalysis,
        PerformanceReport, SeoReport, StructuredDataAnalysis, WcagLevel,
    },
};

pub use dependencies::{DependencySet, resolve_dependencies};
pub use error::{DomainError, ErrorCategory};
pub use validation::{DomainValidator, MAX_DEPTH};
pub use value_objects::{Bundler, FileKind, Framework, Styling, Testing};
