//! Unified error handling for Pagesmith Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Pagesmith Core operations.
#[derive(Debug, Error, Clone)]
pub enum PagesmithError {
    /// Errors from the domain layer (invalid IR or configuration).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (generation and orchestration).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PagesmithError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Pagesmith".into(),
                "Please report this issue at: https://github.com/cosecruz/pagesmith/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    ///
    /// Only lock contention qualifies; every export failure is deterministic.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::RegistryLockError))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Configuration,
    Generation,
    Internal,
}

/// Convenient result type alias.
pub type PagesmithResult<T> = Result<T, PagesmithError>;

/// The single error an export reports.
///
/// Whatever stage failed, callers see `Export failed: <cause>` and can
/// inspect the categorized cause.
#[derive(Debug, Error, Clone)]
#[error("Export failed: {cause}")]
pub struct ExportError {
    #[source]
    cause: PagesmithError,
}

impl ExportError {
    pub fn cause(&self) -> &PagesmithError {
        &self.cause
    }

    pub fn into_cause(self) -> PagesmithError {
        self.cause
    }

    pub fn category(&self) -> ErrorCategory {
        self.cause.category()
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.cause.suggestions()
    }
}

impl From<PagesmithError> for ExportError {
    fn from(cause: PagesmithError) -> Self {
        Self { cause }
    }
}

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> PagesmithResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> PagesmithResult<T> {
        self.map_err(|e| PagesmithError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
