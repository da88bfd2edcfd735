//! Feature Service - generates a CRUD feature inside an existing project.
//!
//! ## Pipeline
//!
//! ```text
//!  guard ──▶ load + instantiate ──▶ write files ──▶ layout ──▶ fixtures ──▶ route
//!    │        (handlers, models,      (rollback       (only if    (upsert    (skipped if
//!    │         page tree)              on failure)     missing)    <e>s)      url listed)
//!    └─ DuplicateFeature: nothing written, no mutator called
//! ```
//!
//! Every step finishes its I/O before the next starts. There is no
//! transaction across steps; the later steps are safe to re-run after an
//! interrupted generation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        error::invalid_document,
        ports::{Filesystem, TemplateRepository},
        services::writer::StructureWriter,
    },
    domain::{
        DomainError, DomainValidator as validator, EntityName, FixtureRecord, Placeholder,
        ProjectLayout, ProjectStructure, RouteEntry, RouteList, SubstitutionMode, TemplateLayout,
        TemplateTree, TokenSubstitution, feature_sources, json_store,
    },
    error::ForgeResult,
};

/// Substitution settings shared by every feature generated in one run.
#[derive(Debug, Clone, Default)]
pub struct FeatureSettings {
    pub placeholder: Placeholder,
    pub mode: SubstitutionMode,
}

/// Everything `add_feature` is about to do, computed without writing.
#[derive(Debug, Clone, Serialize)]
pub struct FeaturePlan {
    pub entity: String,
    pub project_root: PathBuf,
    pub files: Vec<PathBuf>,
    /// Destination of the shared layout, if it has to be installed.
    pub layout: Option<PathBuf>,
    pub collection_key: String,
    pub route: RouteEntry,
    #[serde(skip)]
    structure: ProjectStructure,
    #[serde(skip)]
    layout_content: Option<String>,
}

/// What `add_feature` did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureReport {
    pub entity: String,
    pub project_root: PathBuf,
    pub files_written: Vec<PathBuf>,
    pub layout_installed: bool,
    pub collection_key: String,
    pub route_added: bool,
}

/// CRUD feature generation service.
pub struct FeatureService {
    templates: Arc<dyn TemplateRepository>,
    filesystem: Arc<dyn Filesystem>,
    settings: FeatureSettings,
}

impl FeatureService {
    pub fn new(
        templates: Arc<dyn TemplateRepository>,
        filesystem: Arc<dyn Filesystem>,
        settings: FeatureSettings,
    ) -> Self {
        Self {
            templates,
            filesystem,
            settings,
        }
    }

    /// Conflict guard: true if the feature's page directory exists.
    pub fn feature_exists(&self, project_root: &Path, entity: &EntityName) -> bool {
        self.filesystem
            .exists(&project_root.join(ProjectLayout::feature_dir(entity)))
    }

    /// Load a template tree and rewrite it for `entity`.
    pub fn instantiate(&self, template: &str, entity: &EntityName) -> ForgeResult<TemplateTree> {
        let tree = self.templates.load_tree(template)?;
        validator::validate_template_tree(&tree)?;
        Ok(tree.instantiate(&self.substitution(entity)))
    }

    /// Compute the feature's files without writing anything.
    ///
    /// Runs the conflict guard and loads every template the feature needs,
    /// so a plan that succeeds can only fail later on I/O.
    #[instrument(skip_all, fields(entity = %entity, root = %project_root.display()))]
    pub fn plan(&self, project_root: &Path, entity: &EntityName) -> ForgeResult<FeaturePlan> {
        let feature_dir = ProjectLayout::feature_dir(entity);
        if self.feature_exists(project_root, entity) {
            return Err(ApplicationError::DuplicateFeature {
                entity: entity.to_string(),
                path: project_root.join(feature_dir),
            }
            .into());
        }

        let mut structure = ProjectStructure::new(project_root);
        for source in feature_sources(entity, &self.settings.placeholder) {
            let tree = self.instantiate(&source.template, entity)?;
            debug!(template = %source.template, files = tree.file_count(), "Template instantiated");
            tree.place_under(&source.destination, &mut structure)?;
        }
        validator::validate_project_structure(&structure)?;

        let layout_path = project_root.join(ProjectLayout::LAYOUT);
        let layout_content = if self.filesystem.exists(&layout_path) {
            None
        } else {
            Some(self.templates.load_file(TemplateLayout::LAYOUT)?)
        };

        Ok(FeaturePlan {
            entity: entity.to_string(),
            project_root: project_root.to_path_buf(),
            files: structure.file_destinations(),
            layout: layout_content.as_ref().map(|_| layout_path),
            collection_key: entity.collection_key(),
            route: RouteEntry::for_entity(entity),
            structure,
            layout_content,
        })
    }

    /// Generate a complete CRUD feature for `entity`.
    ///
    /// Fails with `DuplicateFeature`, before any write, if the feature's
    /// page directory already exists.
    #[instrument(skip_all, fields(entity = %entity, root = %project_root.display()))]
    pub fn add_feature(
        &self,
        project_root: &Path,
        entity: &EntityName,
        records: &[FixtureRecord],
    ) -> ForgeResult<FeatureReport> {
        let plan = self.plan(project_root, entity)?;
        info!(files = plan.files.len(), "Generating feature");

        let files_written = StructureWriter::new(self.filesystem.as_ref()).write(&plan.structure)?;

        let layout_installed = match &plan.layout_content {
            Some(content) => self.write_layout(project_root, content)?,
            None => false,
        };

        self.register_fixtures(project_root, &plan.collection_key, records)?;

        let route_added = if self.route_listed(project_root, &plan.route)? {
            warn!(url = %plan.route.url, "Route already listed, leaving route list unchanged");
            false
        } else {
            self.register_route(project_root, entity)?;
            true
        };

        info!(
            files = files_written.len(),
            layout_installed, route_added, "Feature generated"
        );
        Ok(FeatureReport {
            entity: entity.to_string(),
            project_root: project_root.to_path_buf(),
            files_written,
            layout_installed,
            collection_key: plan.collection_key,
            route_added,
        })
    }

    /// Copy the shared page layout into the project unless one exists.
    ///
    /// Returns whether the layout was written.
    pub fn install_layout(&self, project_root: &Path) -> ForgeResult<bool> {
        if self.filesystem.exists(&project_root.join(ProjectLayout::LAYOUT)) {
            debug!("Layout already present");
            return Ok(false);
        }
        let content = self.templates.load_file(TemplateLayout::LAYOUT)?;
        self.write_layout(project_root, &content)
    }

    /// Append the entity's entry to the route list.
    ///
    /// Not idempotent: calling it twice lists the entity twice.
    #[instrument(skip_all, fields(entity = %entity))]
    pub fn register_route(
        &self,
        project_root: &Path,
        entity: &EntityName,
    ) -> ForgeResult<RouteEntry> {
        let path = project_root.join(ProjectLayout::ROUTES);
        let source = self.read_route_list(&path)?;

        let entry = RouteEntry::for_entity(entity);
        let updated = RouteList::new(&source)
            .insert(&entry)
            .map_err(|e| anchor_not_found(&path, e))?;
        self.filesystem.write_file(&path, &updated)?;

        info!(url = %entry.url, "Route registered");
        Ok(entry)
    }

    /// Set `collection_key` in the mock data store to `records`.
    ///
    /// An existing collection under the same key is replaced.
    #[instrument(skip_all, fields(collection = %collection_key, records = records.len()))]
    pub fn register_fixtures(
        &self,
        project_root: &Path,
        collection_key: &str,
        records: &[FixtureRecord],
    ) -> ForgeResult<()> {
        let path = project_root.join(ProjectLayout::FIXTURE_STORE);
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::StoreNotFound { path }.into());
        }

        let source = self.filesystem.read_to_string(&path)?;
        let updated = json_store::upsert_collection(&source, collection_key, records)
            .map_err(|e| invalid_document(&path, e))?;
        self.filesystem.write_file(&path, &updated)?;

        info!("Fixtures registered");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn substitution(&self, entity: &EntityName) -> TokenSubstitution {
        TokenSubstitution::new(self.settings.placeholder.clone(), entity, self.settings.mode)
    }

    fn write_layout(&self, project_root: &Path, content: &str) -> ForgeResult<bool> {
        let path = project_root.join(ProjectLayout::LAYOUT);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, content)?;
        info!(path = %path.display(), "Layout installed");
        Ok(true)
    }

    fn read_route_list(&self, path: &Path) -> ForgeResult<String> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::AnchorNotFound {
                path: path.to_path_buf(),
                detail: "route list file is missing".into(),
            }
            .into());
        }
        self.filesystem.read_to_string(path)
    }

    fn route_listed(&self, project_root: &Path, route: &RouteEntry) -> ForgeResult<bool> {
        let source = self.read_route_list(&project_root.join(ProjectLayout::ROUTES))?;
        Ok(RouteList::new(&source).contains_url(&route.url))
    }
}

fn anchor_not_found(path: &Path, error: DomainError) -> crate::error::ForgeError {
    match error {
        DomainError::AnchorMissing { .. } => ApplicationError::AnchorNotFound {
            path: path.to_path_buf(),
            detail: error.to_string(),
        }
        .into(),
        other => other.into(),
    }
}
