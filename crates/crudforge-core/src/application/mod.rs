//! Application layer for crudforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, FeatureService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    FeaturePlan, FeatureReport, FeatureService, FeatureSettings, MaterializeMode, ProjectReport,
    ProjectRequest, ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProjectBootstrapper, TemplateRepository};

pub use error::ApplicationError;
