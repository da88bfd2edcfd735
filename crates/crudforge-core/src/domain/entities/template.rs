//! Template trees: the read-only stencils generation copies from.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateRepository (port)                                  │
//! │  └── load_tree("example/v1/sample") -> TemplateTree        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TemplateTree (Value Object)                                │
//! │  ├── name      - repository-relative identity               │
//! │  └── Vec<TemplateNode>                                      │
//! │       ├── FileSpec (path, content)                          │
//! │       └── DirectorySpec (path)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  instantiate(&TokenSubstitution) -> TemplateTree            │
//! │  place_under(subpath, &mut ProjectStructure)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A tree is loaded completely (every file body in memory) before anything
//! is written, so a missing or unreadable template can never leave a
//! half-copied project behind.

use std::collections::HashSet;

use crate::domain::{
    entities::common::RelativePath, entities::project_structure::ProjectStructure,
    error::DomainError, substitution::TokenSubstitution,
};

/// A file inside a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: RelativePath,
    pub content: String,
}

impl FileSpec {
    pub fn new(path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A directory inside a template tree. Listed explicitly so empty
/// directories survive a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub path: RelativePath,
}

impl DirectorySpec {
    pub fn new(path: impl Into<RelativePath>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    File(FileSpec),
    Directory(DirectorySpec),
}

impl TemplateNode {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

/// An in-memory snapshot of one template directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTree {
    name: String,
    nodes: Vec<TemplateNode>,
}

impl TemplateTree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: TemplateNode) {
        self.nodes.push(node);
    }

    pub fn with_node(mut self, node: TemplateNode) -> Self {
        self.push(node);
        self
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.with_node(TemplateNode::File(FileSpec::new(path, content)))
    }

    pub fn with_directory(self, path: &str) -> Self {
        self.with_node(TemplateNode::Directory(DirectorySpec::new(path)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[TemplateNode] {
        &self.nodes
    }

    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.nodes.iter().filter_map(|n| match n {
            TemplateNode::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reject trees that could not be written safely.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            let path = node.path();
            if path.as_path().is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.to_string(),
                });
            }
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Produce the entity-specific copy of this tree.
    ///
    /// Node order and count are preserved; only paths and file bodies change.
    pub fn instantiate(&self, substitution: &TokenSubstitution) -> TemplateTree {
        let nodes = self
            .nodes
            .iter()
            .map(|node| match node {
                TemplateNode::File(f) => TemplateNode::File(FileSpec {
                    path: substitution.apply_path(&f.path),
                    content: substitution.apply(&f.content),
                }),
                TemplateNode::Directory(d) => TemplateNode::Directory(DirectorySpec {
                    path: substitution.apply_path(&d.path),
                }),
            })
            .collect();

        TemplateTree {
            name: substitution.apply(&self.name),
            nodes,
        }
    }

    /// Add every node of this tree to `structure`, below `subpath`.
    ///
    /// An empty `subpath` places the nodes at the structure root.
    pub fn place_under(
        &self,
        subpath: &RelativePath,
        structure: &mut ProjectStructure,
    ) -> Result<(), DomainError> {
        if !subpath.as_path().as_os_str().is_empty() {
            structure.add_directory(subpath.clone());
        }
        for node in &self.nodes {
            match node {
                TemplateNode::File(f) => {
                    structure.add_file(subpath.join(&f.path)?, f.content.clone());
                }
                TemplateNode::Directory(d) => {
                    structure.add_directory(subpath.join(&d.path)?);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::entity::EntityName,
        substitution::{Placeholder, SubstitutionMode},
    };

    fn sample_tree() -> TemplateTree {
        TemplateTree::new("example/v1/sample")
            .with_directory("components")
            .with_file("page.tsx", "export default function SamplePage() {}\n")
            .with_file(
                "components/SampleForm.tsx",
                "import { sampleSchema } from '@/core/models/sample';\n",
            )
    }

    fn substitution(entity: &str) -> TokenSubstitution {
        TokenSubstitution::new(
            Placeholder::default(),
            &EntityName::parse(entity).unwrap(),
            SubstitutionMode::Literal,
        )
    }

    #[test]
    fn instantiate_preserves_shape() {
        let tree = sample_tree();
        let out = tree.instantiate(&substitution("order"));

        assert_eq!(out.nodes().len(), tree.nodes().len());
        for (a, b) in tree.nodes().iter().zip(out.nodes()) {
            assert_eq!(
                std::mem::discriminant(a),
                std::mem::discriminant(b),
                "node kind changed"
            );
            assert_eq!(
                a.path().as_path().components().count(),
                b.path().as_path().components().count()
            );
        }
    }

    #[test]
    fn instantiate_removes_every_placeholder() {
        let out = sample_tree().instantiate(&substitution("order"));
        let placeholder = Placeholder::default();

        for node in out.nodes() {
            assert!(!placeholder.occurs_in(&node.path().to_string()));
        }
        for file in out.files() {
            assert!(!placeholder.occurs_in(&file.content), "{}", file.content);
        }
        assert!(
            out.files()
                .any(|f| f.path.to_slash_string() == "components/OrderForm.tsx")
        );
    }

    #[test]
    fn validate_rejects_duplicates() {
        let tree = TemplateTree::new("t")
            .with_file("a.ts", "")
            .with_file("a.ts", "");
        assert!(matches!(
            tree.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn place_under_prefixes_paths() {
        let mut structure = ProjectStructure::new("/project");
        sample_tree()
            .place_under(&RelativePath::new("src/app/v1/sample"), &mut structure)
            .unwrap();

        let files: Vec<_> = structure
            .files()
            .map(|f| f.path.to_slash_string())
            .collect();
        assert!(files.contains(&"src/app/v1/sample/page.tsx".to_string()));
        assert!(files.contains(&"src/app/v1/sample/components/SampleForm.tsx".to_string()));
    }
}
