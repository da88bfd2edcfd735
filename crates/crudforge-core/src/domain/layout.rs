//! Fixed paths of the template repository and of generated projects.
//!
//! ```text
//! templates/                         <project>/
//! ├── website/            ──────▶    ├── (whole skeleton)
//! └── example/                       ├── mock/server.json
//!     ├── core/                      ├── package.json
//!     │   ├── handlers/   ──────▶    └── src/
//!     │   └── models/     ──────▶        ├── routes.tsx
//!     └── v1/                            ├── core/{handlers,models}/
//!         ├── layout.tsx  ──────▶        └── app/v1/
//!         └── sample/     ──────▶            ├── layout.tsx
//!                                            └── <entity>/
//! ```
//!
//! Paths are part of the generated-project contract and are never
//! discovered at run time.

use crate::domain::{
    entities::{common::RelativePath, entity::EntityName},
    substitution::Placeholder,
};

/// Paths inside a generated project, relative to its root.
pub struct ProjectLayout;

impl ProjectLayout {
    pub const SRC: &'static str = "src";
    pub const APP: &'static str = "src/app";
    pub const PAGES: &'static str = "src/app/v1";
    pub const LAYOUT: &'static str = "src/app/v1/layout.tsx";
    pub const HANDLERS: &'static str = "src/core/handlers";
    pub const MODELS: &'static str = "src/core/models";
    pub const ROUTES: &'static str = "src/routes.tsx";
    pub const FIXTURE_STORE: &'static str = "mock/server.json";
    pub const MANIFEST: &'static str = "package.json";

    /// Canonical page directory of a feature: its identity for the
    /// duplicate check.
    pub fn feature_dir(entity: &EntityName) -> RelativePath {
        RelativePath::new(format!("{}/{}", Self::PAGES, entity))
    }
}

/// Paths inside the template repository, relative to its root.
pub struct TemplateLayout;

impl TemplateLayout {
    pub const WEBSITE: &'static str = "website";
    pub const EXAMPLE_PAGES: &'static str = "example/v1";
    pub const EXAMPLE_CORE: &'static str = "example/core";
    pub const HANDLERS: &'static str = "example/core/handlers";
    pub const MODELS: &'static str = "example/core/models";
    pub const LAYOUT: &'static str = "example/v1/layout.tsx";

    /// The example page tree, named after the placeholder itself.
    pub fn feature_page(placeholder: &Placeholder) -> String {
        format!("{}/{}", Self::EXAMPLE_PAGES, placeholder.lower())
    }
}

/// One template tree copied into a project during feature generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSource {
    pub template: String,
    pub destination: RelativePath,
}

/// The trees a feature is generated from, in write order.
///
/// Handlers and models merge into shared directories; the page tree gets a
/// directory of its own named after the entity.
pub fn feature_sources(entity: &EntityName, placeholder: &Placeholder) -> Vec<FeatureSource> {
    vec![
        FeatureSource {
            template: TemplateLayout::HANDLERS.to_string(),
            destination: RelativePath::new(ProjectLayout::HANDLERS),
        },
        FeatureSource {
            template: TemplateLayout::MODELS.to_string(),
            destination: RelativePath::new(ProjectLayout::MODELS),
        },
        FeatureSource {
            template: TemplateLayout::feature_page(placeholder),
            destination: ProjectLayout::feature_dir(entity),
        },
    ]
}
