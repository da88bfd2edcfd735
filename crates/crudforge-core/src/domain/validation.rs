use crate::domain::{
    entities::{ProjectStructure, TemplateTree},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Services call this instead of reaching into each entity.
pub struct DomainValidator;

impl DomainValidator {
    /// A tree must contain at least one node and no conflicting paths.
    pub fn validate_template_tree(tree: &TemplateTree) -> Result<(), DomainError> {
        if tree.is_empty() {
            return Err(DomainError::EmptyTemplate {
                template: tree.name().to_string(),
            });
        }
        tree.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
