pub mod common;
pub mod entity;
pub mod fixture;
pub mod project_structure;
pub mod route;
pub mod template;

pub use crate::domain::DomainError;
pub use entity::EntityName;
pub use fixture::FixtureRecord;
pub use project_structure::ProjectStructure;
pub use route::RouteEntry;
pub use template::{TemplateNode, TemplateTree};
