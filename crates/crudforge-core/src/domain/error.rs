// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried through reports and test assertions)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("Required argument missing: {argument}")]
    MissingArgument { argument: &'static str },

    #[error("Invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    #[error("Invalid placeholder '{placeholder}': {reason}")]
    InvalidPlaceholder { placeholder: String, reason: String },

    #[error("Unknown starter '{starter}'")]
    InvalidStarter { starter: String },

    // ========================================================================
    // Template / Structure Errors
    // ========================================================================
    #[error("Template '{template}' has no content")]
    EmptyTemplate { template: String },

    #[error("Duplicate path in structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Artifact Errors (text-level; the application layer attaches the path)
    // ========================================================================
    #[error("anchor `{anchor}` not found")]
    AnchorMissing { anchor: &'static str },

    #[error("malformed JSON document: {reason}")]
    MalformedDocument { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument { argument } => vec![
                format!("Provide the <{}> argument", argument),
                "Use --help for usage information".into(),
            ],
            Self::InvalidEntityName { name, reason } => vec![
                format!("'{}' cannot be used as an entity name: {}", name, reason),
                "Start with a letter; use letters, digits, '-' or '_'".into(),
                "Examples: customer, order, blogPost".into(),
            ],
            Self::InvalidPlaceholder { .. } => vec![
                "Check substitution.placeholder in your configuration".into(),
                "The placeholder must be a lower-case word such as 'sample'".into(),
            ],
            Self::InvalidStarter { starter } => vec![
                format!("'{}' is not a starter", starter),
                "Available starters: blank, example".into(),
            ],
            Self::EmptyTemplate { template } => vec![
                format!("Template '{}' contains no files", template),
                "Check your templates directory or reinstall the templates".into(),
            ],
            Self::AnchorMissing { anchor } => vec![
                format!("The route list must end with `{}`", anchor),
                "Restore the routes array or add the route manually".into(),
            ],
            Self::MalformedDocument { reason } => vec![
                format!("Fix the JSON document: {}", reason),
                "The top-level value must be an object".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. }
            | Self::InvalidEntityName { .. }
            | Self::InvalidPlaceholder { .. }
            | Self::InvalidStarter { .. } => ErrorCategory::Validation,
            Self::AnchorMissing { .. } => ErrorCategory::NotFound,
            Self::MalformedDocument { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
