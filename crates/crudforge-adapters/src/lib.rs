//! Infrastructure adapters for crudforge.
//!
//! This crate implements the ports defined in `crudforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod bootstrap;
pub mod filesystem;
pub mod template_discovery;
pub mod template_repository;

// Re-export commonly used adapters
pub use bootstrap::{BootstrapCommands, CommandBootstrapper};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_discovery::{TEMPLATES_DIR_ENV, discover_templates_dir};
pub use template_repository::{FsTemplateRepository, InMemoryTemplateRepository};
