//! In-memory template repository.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crudforge_core::{
    application::{ApplicationError, ports::TemplateRepository},
    domain::{DomainValidator as validator, TemplateTree},
    error::ForgeResult,
};

/// Thread-safe in-memory template repository.
///
/// Useful for tests and for embedding a fixed template set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateRepository {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    trees: HashMap<String, TemplateTree>,
    files: HashMap<String, String>,
}

impl InMemoryTemplateRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a tree under its own name.
    pub fn insert_tree(&self, tree: TemplateTree) -> ForgeResult<()> {
        validator::validate_template_tree(&tree)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.trees.insert(tree.name().to_string(), tree);
        Ok(())
    }

    /// Insert or replace a single template file.
    pub fn insert_file(&self, name: impl Into<String>, content: impl Into<String>) -> ForgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.files.insert(name.into(), content.into());
        Ok(())
    }

    /// Get the number of trees.
    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.trees.len()).unwrap_or(0)
    }

    /// Check if repository holds no trees.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn not_found(name: &str) -> ApplicationError {
    ApplicationError::TemplateNotFound {
        template: name.to_string(),
        path: name.into(),
    }
}

impl TemplateRepository for InMemoryTemplateRepository {
    fn load_tree(&self, name: &str) -> ForgeResult<TemplateTree> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner
            .trees
            .get(name)
            .cloned()
            .ok_or_else(|| not_found(name).into())
    }

    fn load_file(&self, name: &str) -> ForgeResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner
            .files
            .get(name)
            .cloned()
            .ok_or_else(|| not_found(name).into())
    }

    fn contains(&self, name: &str) -> bool {
        self.inner
            .read()
            .map(|i| i.trees.contains_key(name) || i.files.contains_key(name))
            .unwrap_or(false)
    }
}
