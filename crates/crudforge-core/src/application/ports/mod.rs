//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `crudforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: file operations on the target project
//!   - `TemplateRepository`: read-only template trees
//!   - `ProjectBootstrapper`: external project generator and package installer
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, ProjectBootstrapper, TemplateRepository};

#[cfg(test)]
pub use output::{MockFilesystem, MockProjectBootstrapper, MockTemplateRepository};
