//! Scaffold Service - project creation and template materialization.
//!
//! This service coordinates the project creation workflow:
//! 1. Load every template tree the project needs
//! 2. Run the external bootstrapper and package installer
//! 3. Merge configured scripts into `package.json`
//! 4. Materialize the website skeleton (and the example starter)
//!
//! Template trees are loaded before the first external command runs, so a
//! broken template directory fails fast instead of after a long bootstrap.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        error::invalid_document,
        ports::{Filesystem, ProjectBootstrapper, TemplateRepository},
        services::writer::StructureWriter,
    },
    domain::{
        DomainValidator as validator, ProjectLayout, ProjectStructure,
        RelativePath, Starter, TemplateLayout, json_store,
    },
    error::ForgeResult,
};

/// Where a template tree lands inside the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializeMode {
    /// The destination is the whole target project.
    Replace,
    /// The destination is a subdirectory of an existing project.
    MergeInto(RelativePath),
}

impl MaterializeMode {
    fn subpath(&self) -> RelativePath {
        match self {
            Self::Replace => RelativePath::new(""),
            Self::MergeInto(path) => path.clone(),
        }
    }
}

/// Input of `create_project`.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    pub name: String,
    pub parent: PathBuf,
    pub starter: Starter,
    /// Run the external project generator.
    pub bootstrap: bool,
    /// Install third-party packages after bootstrapping.
    pub install: bool,
    /// Scripts merged into `package.json`.
    pub scripts: BTreeMap<String, String>,
}

impl ProjectRequest {
    pub fn new(name: impl Into<String>, parent: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
            starter: Starter::default(),
            bootstrap: true,
            install: true,
            scripts: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

/// What `create_project` did (or, from `plan_project`, would do).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    pub name: String,
    pub root: PathBuf,
    pub starter: Starter,
    pub bootstrapped: bool,
    pub dependencies_installed: bool,
    pub scripts_merged: bool,
    pub files: Vec<PathBuf>,
}

/// Project creation service.
pub struct ScaffoldService {
    templates: Arc<dyn TemplateRepository>,
    filesystem: Arc<dyn Filesystem>,
    bootstrapper: Arc<dyn ProjectBootstrapper>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        templates: Arc<dyn TemplateRepository>,
        filesystem: Arc<dyn Filesystem>,
        bootstrapper: Arc<dyn ProjectBootstrapper>,
    ) -> Self {
        Self {
            templates,
            filesystem,
            bootstrapper,
        }
    }

    /// Copy one template tree, verbatim, into `destination`.
    ///
    /// The tree is loaded completely before the first write; a missing
    /// template fails with `TemplateNotFound` and writes nothing.
    #[instrument(skip_all, fields(template = %template, destination = %destination.display()))]
    pub fn materialize(
        &self,
        template: &str,
        destination: &Path,
        mode: MaterializeMode,
    ) -> ForgeResult<Vec<PathBuf>> {
        let structure = self.load_structure(&[(template, mode)], destination)?;
        StructureWriter::new(self.filesystem.as_ref()).write(&structure)
    }

    /// Merge `scripts` into the project's `package.json`.
    ///
    /// Returns `false` (after a warning) when the project has no manifest.
    #[instrument(skip_all, fields(root = %project_root.display()))]
    pub fn merge_scripts(
        &self,
        project_root: &Path,
        scripts: &BTreeMap<String, String>,
    ) -> ForgeResult<bool> {
        let path = project_root.join(ProjectLayout::MANIFEST);
        if !self.filesystem.exists(&path) {
            warn!(path = %path.display(), "package.json not found, skipping scripts");
            return Ok(false);
        }

        let source = self.filesystem.read_to_string(&path)?;
        let merged = json_store::merge_scripts(&source, scripts)
            .map_err(|e| invalid_document(&path, e))?;
        self.filesystem.write_file(&path, &merged)?;

        info!(scripts = scripts.len(), "Scripts merged into package.json");
        Ok(true)
    }

    /// Create a new project.
    #[instrument(skip_all, fields(project = %request.name, starter = %request.starter))]
    pub fn create_project(&self, request: &ProjectRequest) -> ForgeResult<ProjectReport> {
        let root = request.root();
        info!(root = %root.display(), "Creating project");

        if !request.bootstrap && self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        let structure = self.load_structure(&Self::trees_for(request.starter), &root)?;

        if request.bootstrap {
            self.bootstrapper.bootstrap(&request.name, &request.parent)?;
            if request.install {
                self.bootstrapper.install_dependencies(&root)?;
            }
        } else {
            self.filesystem.create_dir_all(&root)?;
        }

        let scripts_merged = if request.scripts.is_empty() {
            false
        } else {
            self.merge_scripts(&root, &request.scripts)?
        };

        let files = StructureWriter::new(self.filesystem.as_ref()).write(&structure)?;

        info!(files = files.len(), "Project created");
        Ok(ProjectReport {
            name: request.name.clone(),
            root,
            starter: request.starter,
            bootstrapped: request.bootstrap,
            dependencies_installed: request.bootstrap && request.install,
            scripts_merged,
            files,
        })
    }

    /// Compute what `create_project` would write, without running commands
    /// or touching the filesystem.
    pub fn plan_project(&self, request: &ProjectRequest) -> ForgeResult<ProjectReport> {
        let root = request.root();
        let structure = self.load_structure(&Self::trees_for(request.starter), &root)?;

        Ok(ProjectReport {
            name: request.name.clone(),
            root,
            starter: request.starter,
            bootstrapped: request.bootstrap,
            dependencies_installed: request.bootstrap && request.install,
            scripts_merged: !request.scripts.is_empty(),
            files: structure.file_destinations(),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn trees_for(starter: Starter) -> Vec<(&'static str, MaterializeMode)> {
        let mut trees = vec![(TemplateLayout::WEBSITE, MaterializeMode::Replace)];
        if starter.includes_example() {
            trees.push((
                TemplateLayout::EXAMPLE_PAGES,
                MaterializeMode::MergeInto(RelativePath::new(ProjectLayout::APP)),
            ));
            trees.push((
                TemplateLayout::EXAMPLE_CORE,
                MaterializeMode::MergeInto(RelativePath::new(ProjectLayout::SRC)),
            ));
        }
        trees
    }

    /// Load every tree and lay them out below `root` in one structure.
    fn load_structure(
        &self,
        trees: &[(&str, MaterializeMode)],
        root: &Path,
    ) -> ForgeResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(root);

        for (name, mode) in trees {
            let tree = self.templates.load_tree(name)?;
            validator::validate_template_tree(&tree)?;
            tree.place_under(&mode.subpath(), &mut structure)?;
        }

        validator::validate_project_structure(&structure)?;
        Ok(structure)
    }
}
