//! Pagesmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Pagesmith
//! export engine: it turns a framework-neutral component tree into a
//! ready-to-run web project, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          pagesmith-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ExportService, ProjectWriter)       │
//! │   config-file rules, docs, metadata     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (TargetBackend, BackendRegistry,        │
//! │  ProgressSink, Filesystem)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   pagesmith-adapters (Infrastructure)   │
//! │ (React/Vue/Svelte/Angular/Html backends,│
//! │  InMemoryBackendRegistry, filesystems)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ComponentNode, ExportConfig, resolver) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagesmith_core::prelude::*;
//!
//! // 1. Describe the export
//! let config = ExportConfig::builder()
//!     .framework(Framework::React)
//!     .typescript(true)
//!     .build()?;
//!
//! // 2. Run it through a registry of backends (from pagesmith-adapters)
//! let service = ExportService::new(Box::new(registry));
//! let result = service.export(&nodes, &config)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExportService, ProjectWriter,
        ports::{BackendRegistry, Filesystem, ProgressSink, TargetBackend},
    };
    pub use crate::domain::{
        Bundler, ComponentNode, ExportConfig, ExportResult, FileKind, Framework, GeneratedFile,
        Styling, Testing,
    };
    pub use crate::error::{ExportError, PagesmithError, PagesmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
