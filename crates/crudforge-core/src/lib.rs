//! crudforge core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the crudforge
//! generator: project skeleton creation and CRUD feature generation from
//! template trees, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          crudforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, FeatureService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateRepository,        │
//! │  ProjectBootstrapper)                   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudforge-adapters (Infrastructure)  │
//! │ (LocalFilesystem, FsTemplateRepository, │
//! │  CommandBootstrapper, ...)              │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (EntityName, TemplateTree, RouteList,   │
//! │  TokenSubstitution, json_store)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use crudforge_core::prelude::*;
//!
//! # fn run(templates: std::sync::Arc<dyn TemplateRepository>,
//! #        filesystem: std::sync::Arc<dyn Filesystem>) -> ForgeResult<()> {
//! let service = FeatureService::new(templates, filesystem, FeatureSettings::default());
//! let entity = EntityName::parse("order")?;
//! let report = service.add_feature(Path::new("./my-app"), &entity, &sample_records())?;
//! assert!(report.route_added);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FeatureReport, FeatureService, FeatureSettings, MaterializeMode, ProjectReport,
        ProjectRequest, ScaffoldService,
        ports::{Filesystem, ProjectBootstrapper, TemplateRepository},
    };
    pub use crate::domain::{
        EntityName, FixtureRecord, Placeholder, RelativePath, Starter, SubstitutionMode,
        TemplateNode, TemplateTree, sample_records,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
