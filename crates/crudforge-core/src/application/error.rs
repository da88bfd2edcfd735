//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! generation rules themselves. Those are `DomainError` from `crate::domain`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::DomainError;
use crate::error::{ErrorCategory, ForgeError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template tree or file is absent from the repository.
    #[error("Template '{template}' not found at {path}")]
    TemplateNotFound { template: String, path: PathBuf },

    /// The feature's page directory already exists.
    #[error("Feature '{entity}' already exists at {path}")]
    DuplicateFeature { entity: String, path: PathBuf },

    /// The route list is missing or has no closing anchor.
    #[error("Cannot register route in {path}: {detail}")]
    AnchorNotFound { path: PathBuf, detail: String },

    /// The mock data store file is missing.
    #[error("Mock data store not found at {path}")]
    StoreNotFound { path: PathBuf },

    /// A JSON artifact exists but cannot be edited.
    #[error("Invalid JSON document at {path}: {reason}")]
    InvalidStore { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external bootstrap or install command failed.
    #[error("Command `{command}` failed: {reason}")]
    BootstrapFailed { command: String, reason: String },

    /// Adapter state access failed (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path, .. } => vec![
                format!("Expected a template at: {}", path.display()),
                "Point --templates (or $CRUDFORGE_TEMPLATES_DIR) at your templates directory".into(),
            ],
            Self::DuplicateFeature { entity, path } => vec![
                format!("'{}' was already generated at {}", entity, path.display()),
                "Choose a different entity name".into(),
                "Or remove the directory first if you want to regenerate it".into(),
            ],
            Self::AnchorNotFound { path, .. } => vec![
                format!("Check that {} exists", path.display()),
                "The routes array must be closed with `];`".into(),
            ],
            Self::StoreNotFound { path } => vec![
                format!("Create {} containing {{}}", path.display()),
                "Run the command from the project root or pass --project-dir".into(),
            ],
            Self::InvalidStore { path, reason } => vec![
                format!("Fix {}: {}", path.display(), reason),
                "The file must contain a JSON object".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::BootstrapFailed { command, .. } => vec![
                format!("Try running `{}` yourself to see the full output", command),
                "Use --skip-bootstrap / --skip-install to skip external commands".into(),
            ],
            Self::StoreLockError => vec![
                "Internal state is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. }
            | Self::AnchorNotFound { .. }
            | Self::StoreNotFound { .. } => ErrorCategory::NotFound,
            Self::DuplicateFeature { .. }
            | Self::ProjectExists { .. }
            | Self::InvalidStore { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::StoreLockError
            | Self::BootstrapFailed { .. } => ErrorCategory::Internal,
        }
    }
}

/// Attach the artifact path to a failed JSON edit.
pub(crate) fn invalid_document(path: &Path, error: DomainError) -> ForgeError {
    match error {
        DomainError::MalformedDocument { reason } => ApplicationError::InvalidStore {
            path: path.to_path_buf(),
            reason,
        }
        .into(),
        other => other.into(),
    }
}
