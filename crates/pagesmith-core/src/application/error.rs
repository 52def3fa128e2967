//! Application layer errors.
//!
//! These errors represent failures in orchestration and code emission, not
//! invalid input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during export orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A backend failed while emitting one component.
    #[error("{framework} generation failed for '{component}': {reason}")]
    GenerationFailed {
        framework: String,
        component: String,
        reason: String,
    },

    /// A config-file rule or the manifest could not be serialized.
    #[error("Failed to serialize {what}: {reason}")]
    SerializationFailed { what: String, reason: String },

    /// Backend registry access failed (lock poisoned).
    #[error("Backend registry error")]
    RegistryLockError,

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Output directory already exists.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::GenerationFailed { component, .. } => vec![
                format!("Check the props and children of '{}'", component),
                "Run with -vv to see which file was being emitted".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::RegistryLockError => vec![
                "The backend registry is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different output directory with --out".into(),
            ],
            Self::SerializationFailed { .. } => vec![
                "This appears to be a bug in Pagesmith".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::GenerationFailed { .. } => ErrorCategory::Generation,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::RegistryLockError
            | Self::SerializationFailed { .. } => ErrorCategory::Internal,
        }
    }
}
