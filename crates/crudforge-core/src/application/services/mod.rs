//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a project" or "add a CRUD feature".

pub mod feature_service;
pub mod scaffold_service;
pub mod writer;

pub use feature_service::{FeaturePlan, FeatureReport, FeatureService, FeatureSettings};
pub use scaffold_service::{MaterializeMode, ProjectReport, ProjectRequest, ScaffoldService};
pub use writer::StructureWriter;
