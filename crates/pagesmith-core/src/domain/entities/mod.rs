pub mod common;
pub mod component;
pub mod config;
pub mod generated;
pub mod result;

pub use crate::domain::DomainError;
pub use component::{ComponentNode, ComponentStyles, SeoData, Walk};
pub use config::ExportConfig;
pub use generated::GeneratedFile;
pub use result::{ExportMetadata, ExportResult};
