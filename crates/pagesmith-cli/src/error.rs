//! Error handling for the Pagesmith CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use pagesmith_core::error::{ExportError, PagesmithError};

// Re-export so callers only need `use crate::error::*`.
pub use pagesmith_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Neither `--framework` nor `defaults.framework` was given.
    #[error("No target framework selected")]
    MissingFramework,

    /// The component tree file does not exist.
    #[error("Component tree not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The component tree file is not a component or an array of components.
    #[error("Invalid component tree in {}: {source}", path.display())]
    InvalidTree {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output directory already exists.
    #[error("Project already exists at {}", path.display())]
    ProjectExists { path: PathBuf },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `pagesmith-core` outside an export run.
    #[error("{0}")]
    Core(#[from] PagesmithError),

    /// An export run failed.
    #[error("{0}")]
    Export(#[from] ExportError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Report output could not be encoded.
    #[error("Failed to encode {what} as JSON")]
    Serialization {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An interactive prompt failed.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::MissingFramework => vec![
                "Pass a target with --framework (react, vue, svelte, angular, html)".into(),
                "Or set a default: pagesmith config set defaults.framework react".into(),
                "List targets: pagesmith frameworks".into(),
            ],

            Self::InputNotFound { path } => vec![
                format!("No file at '{}'", path.display()),
                "Pass the path of a JSON component tree".into(),
            ],

            Self::InvalidTree { .. } => vec![
                "The file must hold one component object or an array of them".into(),
                "Every component needs at least an \"id\" and a \"type\"".into(),
                "Example: [{\"id\": \"cta\", \"type\": \"button\", \"props\": {\"text\": \"Go\"}}]"
                    .into(),
            ],

            Self::ProjectExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different directory with --out".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file: pagesmith config path".into(),
                "Use 'pagesmith init --force' to restore the default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::Export(export_err) => export_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
                "Check available disk space".into(),
            ],

            Self::Serialization { .. } => vec![
                "This appears to be a bug in Pagesmith".into(),
                "Retry with --format human".into(),
            ],

            Self::Prompt { .. } => vec![
                "Pass --yes to skip the confirmation prompt".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::MissingFramework => ErrorCategory::UserError,
            Self::InputNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidTree { .. } => ErrorCategory::UserError,
            Self::ProjectExists { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => core_category(core.category()),
            Self::Export(export) => core_category(export.category()),
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Serialization { .. } => ErrorCategory::Internal,
            Self::Prompt { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Coloured report: headline, cause chain (verbose only), suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same report as [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: String, style: fn(&str) -> String| {
            if color { style(&text) } else { text }
        };
        let mut out = String::new();

        if color {
            let _ = writeln!(out, "\n{} {}\n", "✗".red().bold(), "Error:".red().bold());
            let _ = writeln!(out, "  {}", self.to_string().red());
        } else {
            let _ = writeln!(out, "\nError: {self}");
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = paint(format!("Caused by: {err}"), |t| t.dimmed().to_string());
                let _ = writeln!(out, "  {line}");
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let title = paint("Suggestions:".to_owned(), |t| t.yellow().bold().to_string());
            let _ = writeln!(out, "\n{title}");
            for suggestion in &suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        if !verbose {
            let hint = paint("Run with -v for the full cause chain.".to_owned(), |t| {
                t.dimmed().to_string()
            });
            let _ = writeln!(out, "\n{hint}");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

fn core_category(category: CoreCategory) -> ErrorCategory {
    match category {
        CoreCategory::Validation | CoreCategory::Compatibility => ErrorCategory::UserError,
        CoreCategory::NotFound => ErrorCategory::NotFound,
        CoreCategory::Configuration => ErrorCategory::Configuration,
        CoreCategory::Generation | CoreCategory::Internal => ErrorCategory::Internal,
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
///
/// Two concrete impls are provided:
/// - `Result<T, std::io::Error>`  → `CliError::IoError`
/// - `Result<T, PagesmithError>`  → `CliError::Core`
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, PagesmithError> {
    /// Core errors already carry their context; the message is dropped.
    fn with_cli_context<F, S>(self, _f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(CliError::Core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_core::application::ApplicationError;
    use pagesmith_core::domain::DomainError;
    use std::io;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn missing_framework_suggests_flag_and_config() {
        let suggestions = CliError::MissingFramework.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("--framework")));
        assert!(suggestions.iter().any(|s| s.contains("defaults.framework")));
    }

    #[test]
    fn project_exists_suggests_force() {
        let err = CliError::ProjectExists {
            path: PathBuf::from("/tmp/test"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn export_errors_forward_core_suggestions() {
        let cause = PagesmithError::from(DomainError::UnsupportedFramework("qwik".into()));
        let err = CliError::from(ExportError::from(cause.clone()));
        assert_eq!(err.suggestions(), cause.suggestions());
        assert!(err.to_string().starts_with("Export failed: "));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
        let cyclic = PagesmithError::from(DomainError::CyclicReference {
            id: "a".into(),
            path: "a > b > a".into(),
        });
        assert_eq!(CliError::from(ExportError::from(cyclic)).exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::InputNotFound {
            path: PathBuf::from("page.json"),
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        let unsupported = PagesmithError::from(DomainError::UnsupportedFramework("qwik".into()));
        assert_eq!(CliError::from(unsupported).exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        let lock = PagesmithError::from(ApplicationError::RegistryLockError);
        assert_eq!(CliError::from(lock).exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::ProjectExists {
            path: PathBuf::from("/tmp/x"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("Run with -v"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn format_plain_verbose_shows_cause_chain() {
        let err = CliError::IoError {
            message: "writing index.html".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("Run with -v"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_core_error() {
        let result: Result<(), PagesmithError> = Err(DomainError::EmptyForest.into());
        let cli = result.with_cli_context(|| "ignored");
        assert!(matches!(cli, Err(CliError::Core(_))));
    }
}
