// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for crudforge.
//!
//! This module contains pure generation logic with no I/O. Reading and
//! writing files, loading templates and running external commands happen
//! through ports defined in the application layer.
//!
//! ## What lives here
//!
//! - **Entities**: `EntityName`, `TemplateTree`, `ProjectStructure`,
//!   `RouteEntry`, `FixtureRecord`
//! - **Substitution**: placeholder rewriting of paths and bodies
//! - **Text mutators**: route list insertion, JSON store edits
//! - **Layout**: fixed template and project paths
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod json_store;
pub mod layout;
pub mod route_registry;
pub mod substitution;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    entity::EntityName,
    fixture::{FixtureRecord, sample_records},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    route::RouteEntry,
    template::{DirectorySpec, FileSpec, TemplateNode, TemplateTree},
};

pub use error::{DomainError, ErrorCategory};
pub use layout::{FeatureSource, ProjectLayout, TemplateLayout, feature_sources};
pub use route_registry::{LIST_END_ANCHOR, RouteList};
pub use substitution::{Placeholder, SubstitutionMode, TokenSubstitution};
pub use value_objects::Starter;

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Feature generation, end to end in memory
    // ========================================================================

    fn example_tree() -> TemplateTree {
        TemplateTree::new("example/v1/sample")
            .with_file(
                "page.tsx",
                "import { Sample } from '@/core/models/sample';\nexport default function SamplePage() {}\n",
            )
            .with_directory("components")
            .with_file("components/SampleTable.tsx", "const samples: Sample[] = [];\n")
    }

    #[test]
    fn order_feature_end_to_end() {
        let entity = EntityName::parse("order").unwrap();
        let substitution =
            TokenSubstitution::new(Placeholder::default(), &entity, SubstitutionMode::Literal);

        let mut structure = ProjectStructure::new("/project");
        example_tree()
            .instantiate(&substitution)
            .place_under(&ProjectLayout::feature_dir(&entity), &mut structure)
            .unwrap();
        DomainValidator::validate_project_structure(&structure).unwrap();

        let page = structure
            .files()
            .find(|f| f.path.to_slash_string() == "src/app/v1/order/page.tsx")
            .unwrap();
        assert!(page.content.contains("OrderPage"));
        assert!(page.content.contains("@/core/models/order"));

        let routes = RouteList::new("export const routes = [\n];\n")
            .insert(&RouteEntry::for_entity(&entity))
            .unwrap();
        assert!(routes.contains("label: \"CRUD Order\""));
        assert!(routes.contains("url: \"/v1/order\""));

        let store =
            json_store::upsert_collection("{}", &entity.collection_key(), &sample_records())
                .unwrap();
        let store: serde_json::Value = serde_json::from_str(&store).unwrap();
        assert_eq!(store["orders"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn empty_tree_fails_validation() {
        assert!(matches!(
            DomainValidator::validate_template_tree(&TemplateTree::new("website")),
            Err(DomainError::EmptyTemplate { .. })
        ));
    }

    #[test]
    fn placing_the_same_tree_twice_is_deterministic() {
        let place = || {
            let mut structure = ProjectStructure::new("/a");
            example_tree()
                .place_under(&RelativePath::new(""), &mut structure)
                .unwrap();
            structure
                .files()
                .map(|f| (f.path.to_slash_string(), f.content.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(place(), place());
    }
}
