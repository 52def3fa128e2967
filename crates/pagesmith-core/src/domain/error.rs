// ============================================================================
// domain/error.rs - EXPORT DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through the progress channel and the export error)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (component forest)
    // ========================================================================
    #[error("Component tree is empty: at least one top-level component is required")]
    EmptyForest,

    #[error("Component at {location} is missing required field '{field}'")]
    MissingNodeField {
        field: &'static str,
        location: String,
    },

    #[error("Cyclic component reference: '{id}' (path: {path})")]
    CyclicReference { id: String, path: String },

    #[error("Component tree exceeds maximum depth of {depth} at '{id}'")]
    MaxDepthExceeded { id: String, depth: usize },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Unsupported framework: {0}")]
    UnsupportedFramework(String),

    #[error("Invalid export configuration: {0}")]
    InvalidConfig(String),

    #[error("option '{option}' incompatible with framework '{framework}': {reason}")]
    IncompatibleOption {
        option: String,
        framework: String,
        reason: String,
    },

    // ========================================================================
    // Output Invariants
    // ========================================================================
    #[error("Duplicate path in export: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyForest => vec![
                "Add at least one component to the tree before exporting".into(),
                "The input must be a JSON array of component nodes".into(),
            ],
            Self::MissingNodeField { field, location } => vec![
                format!("Set a non-empty '{}' on the component at {}", field, location),
                "Every component needs both an 'id' and a 'type'".into(),
            ],
            Self::CyclicReference { id, .. } => vec![
                format!("Component id '{}' appears twice on one branch", id),
                "Give every nested component a distinct id".into(),
            ],
            Self::UnsupportedFramework(name) => vec![
                format!("'{}' is not a registered export target", name),
                "Try: pagesmith frameworks".into(),
            ],
            Self::IncompatibleOption { option, .. } => vec![
                format!("Remove or change the '{}' option", option),
                "Try: pagesmith deps --framework <name> to preview a configuration".into(),
            ],
            Self::InvalidConfig(msg) => vec![
                "Check your export configuration".into(),
                format!("Details: {}", msg),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyForest
            | Self::MissingNodeField { .. }
            | Self::CyclicReference { .. }
            | Self::MaxDepthExceeded { .. } => ErrorCategory::Validation,
            Self::UnsupportedFramework(_) | Self::InvalidConfig(_) => ErrorCategory::Configuration,
            Self::IncompatibleOption { .. } => ErrorCategory::Compatibility,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Configuration,
    Internal,
}
