//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudforge-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::TemplateTree;
use crate::error::ForgeResult;

/// Port for filesystem operations on the target project.
///
/// Implemented by:
/// - `crudforge_adapters::filesystem::LocalFilesystem` (production)
/// - `crudforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Services only ever add or rewrite files. The one removal,
/// `remove_file`, is used to roll back files the current run created.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> ForgeResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> ForgeResult<()>;
}

/// Port for the read-only template repository.
///
/// Templates are addressed by slash-separated names relative to the
/// repository root (`website`, `example/v1/sample`, `example/v1/layout.tsx`).
///
/// Implemented by:
/// - `crudforge_adapters::template_repository::FsTemplateRepository`
/// - `crudforge_adapters::template_repository::InMemoryTemplateRepository`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRepository: Send + Sync {
    /// Load a whole directory tree, every file body included.
    ///
    /// Fails with `TemplateNotFound` if `name` is not a directory.
    fn load_tree(&self, name: &str) -> ForgeResult<TemplateTree>;

    /// Load a single template file.
    ///
    /// Fails with `TemplateNotFound` if `name` is not a file.
    fn load_file(&self, name: &str) -> ForgeResult<String>;

    /// True if `name` names a tree or a file.
    fn contains(&self, name: &str) -> bool;
}

/// Port for the external tools that create and equip a new project.
///
/// Implemented by:
/// - `crudforge_adapters::bootstrap::CommandBootstrapper`
#[cfg_attr(test, mockall::automock)]
pub trait ProjectBootstrapper: Send + Sync {
    /// Generate the project skeleton `parent/name` with the external tool.
    fn bootstrap(&self, name: &str, parent: &Path) -> ForgeResult<()>;

    /// Install the project's third-party packages.
    fn install_dependencies(&self, project_root: &Path) -> ForgeResult<()>;
}
