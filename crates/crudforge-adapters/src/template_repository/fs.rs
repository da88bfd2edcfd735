//! Filesystem-backed template repository.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── website/                 ← project skeleton
//! │   ├── mock/server.json
//! │   └── src/routes.tsx
//! └── example/
//!     ├── core/
//!     │   ├── handlers/sample.ts
//!     │   └── models/sample.ts
//!     └── v1/
//!         ├── layout.tsx
//!         └── sample/page.tsx  ← feature page tree
//! ```
//!
//! Template names are slash-separated paths below the repository root.
//! Trees are read completely, with every file body, before they are
//! returned.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use crudforge_core::{
    application::{ApplicationError, ports::TemplateRepository},
    domain::{DirectorySpec, FileSpec, RelativePath, TemplateNode, TemplateTree},
    error::ForgeResult,
};

use crate::filesystem::map_io_error;

/// Reads templates from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsTemplateRepository {
    root: PathBuf,
}

impl FsTemplateRepository {
    /// Create a repository rooted at `root`.
    ///
    /// The directory does not need to exist yet; lookups against a missing
    /// root fail with `TemplateNotFound`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a template name to its on-disk location.
    ///
    /// Names that would escape the root are reported as not found.
    fn resolve(&self, name: &str) -> ForgeResult<PathBuf> {
        let relative = RelativePath::try_new(name).map_err(|_| self.not_found(name))?;
        Ok(self.root.join(relative))
    }

    fn not_found(&self, name: &str) -> ApplicationError {
        ApplicationError::TemplateNotFound {
            template: name.to_string(),
            path: self.root.join(name),
        }
    }
}

impl TemplateRepository for FsTemplateRepository {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load_tree(&self, name: &str) -> ForgeResult<TemplateTree> {
        let dir = self.resolve(name)?;
        if !dir.is_dir() {
            return Err(self.not_found(name).into());
        }

        let mut tree = TemplateTree::new(name);

        // Sorted so the same tree always produces the same write order.
        for walk_entry in WalkDir::new(&dir).min_depth(1).sort_by_file_name() {
            let walk_entry = walk_entry.map_err(|e| {
                let path = e.path().unwrap_or(dir.as_path()).to_path_buf();
                ApplicationError::FilesystemError {
                    path,
                    reason: format!("directory walk error: {e}"),
                }
            })?;
            let abs_path = walk_entry.path();
            let relative = abs_path.strip_prefix(&dir).map_err(|_| {
                ApplicationError::FilesystemError {
                    path: abs_path.to_path_buf(),
                    reason: format!("not below template root {}", dir.display()),
                }
            })?;
            let relative = RelativePath::try_new(relative)?;

            if walk_entry.file_type().is_dir() {
                tree.push(TemplateNode::Directory(DirectorySpec::new(relative)));
            } else if walk_entry.file_type().is_file() {
                let content = fs::read_to_string(abs_path)
                    .map_err(|e| map_io_error(abs_path, e, "read template file"))?;
                tree.push(TemplateNode::File(FileSpec::new(relative, content)));
            }
        }

        debug!(files = tree.file_count(), nodes = tree.nodes().len(), "Template tree loaded");
        Ok(tree)
    }

    fn load_file(&self, name: &str) -> ForgeResult<String> {
        let path = self.resolve(name)?;
        if !path.is_file() {
            return Err(self.not_found(name).into());
        }
        fs::read_to_string(&path).map_err(|e| map_io_error(&path, e, "read template file"))
    }

    fn contains(&self, name: &str) -> bool {
        self.resolve(name).map(|p| p.exists()).unwrap_or(false)
    }
}
