//! End-to-end generation against real directories, using the templates
//! shipped at the repository root.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crudforge_adapters::{
    FsTemplateRepository, InMemoryTemplateRepository, LocalFilesystem, MemoryFilesystem,
};
use crudforge_core::{
    application::{
        ApplicationError, FeatureService, FeatureSettings, MaterializeMode, ScaffoldService,
        ports::ProjectBootstrapper,
    },
    domain::{EntityName, FixtureRecord, Placeholder, TemplateTree, sample_records},
    error::{ForgeError, ForgeResult},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use walkdir::WalkDir;

struct NoBootstrap;

impl ProjectBootstrapper for NoBootstrap {
    fn bootstrap(&self, _name: &str, _parent: &Path) -> ForgeResult<()> {
        panic!("bootstrapper must not run in these tests")
    }

    fn install_dependencies(&self, _project_root: &Path) -> ForgeResult<()> {
        panic!("bootstrapper must not run in these tests")
    }
}

fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

fn scaffold(templates: &Path) -> ScaffoldService {
    ScaffoldService::new(
        Arc::new(FsTemplateRepository::new(templates)),
        Arc::new(LocalFilesystem::new()),
        Arc::new(NoBootstrap),
    )
}

fn features(templates: &Path) -> FeatureService {
    FeatureService::new(
        Arc::new(FsTemplateRepository::new(templates)),
        Arc::new(LocalFilesystem::new()),
        FeatureSettings::default(),
    )
}

/// A fresh project made from the website skeleton.
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    scaffold(&shipped_templates())
        .materialize("website", dir.path(), MaterializeMode::Replace)
        .unwrap();
    dir
}

/// Every file below `root` with its content, sorted by path.
fn snapshot(root: &Path) -> Vec<(PathBuf, String)> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read_to_string(e.path()).unwrap())
        })
        .collect()
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn order() -> EntityName {
    EntityName::parse("order").unwrap()
}

#[test]
fn order_feature_end_to_end() {
    let project = project();
    let root = project.path();
    let routes_before = read(root, "src/routes.tsx");

    let report = features(&shipped_templates())
        .add_feature(root, &order(), &sample_records())
        .unwrap();

    assert!(report.route_added);
    assert!(report.layout_installed);
    assert_eq!(report.collection_key, "orders");

    // Route list: one new entry, anchor preserved, prefix untouched.
    let routes = read(root, "src/routes.tsx");
    assert_eq!(routes.matches("];").count(), 1);
    assert_eq!(routes.matches("url: \"/v1/order\"").count(), 1);
    assert!(routes.contains("label: \"CRUD Order\""));
    let anchor = routes_before.rfind("];").unwrap();
    assert!(routes.starts_with(&routes_before[..anchor]));
    assert!(routes.ends_with(&routes_before[anchor..]));

    // Store: exactly the three sample records under `orders`.
    let store: Value = serde_json::from_str(&read(root, "mock/server.json")).unwrap();
    assert_eq!(store, json!({ "orders": serde_json::to_value(sample_records()).unwrap() }));

    // Generated files: placeholder fully replaced.
    let placeholder = Placeholder::default();
    let page_dir = root.join("src/app/v1/order");
    assert!(page_dir.join("page.tsx").is_file());
    assert!(page_dir.join("components/OrderTable.tsx").is_file());
    for (path, content) in snapshot(&page_dir) {
        assert!(!placeholder.occurs_in(&path.to_string_lossy()), "{path:?}");
        assert!(!placeholder.occurs_in(&content), "{path:?}");
    }
    assert!(read(root, "src/app/v1/order/page.tsx").contains("OrderPage"));
    assert!(read(root, "src/core/handlers/order.ts").contains("\"/orders\""));
    assert!(read(root, "src/core/models/order.ts").contains("orderSchema"));
    assert!(root.join("src/app/v1/layout.tsx").is_file());
}

#[test]
fn rerun_is_refused_and_changes_nothing() {
    let project = project();
    let root = project.path();
    let service = features(&shipped_templates());

    service.add_feature(root, &order(), &sample_records()).unwrap();
    let before = snapshot(root);

    let err = service
        .add_feature(root, &order(), &sample_records())
        .unwrap_err();

    assert!(matches!(
        err,
        ForgeError::Application(ApplicationError::DuplicateFeature { .. })
    ));
    assert_eq!(snapshot(root), before);
}

#[test]
fn duplicate_feature_performs_zero_writes() {
    let fs = MemoryFilesystem::new()
        .with_file("/p/src/app/v1/order/page.tsx", "existing")
        .unwrap();
    let service = FeatureService::new(
        Arc::new(FsTemplateRepository::new(shipped_templates())),
        Arc::new(fs.clone()),
        FeatureSettings::default(),
    );

    assert!(service.add_feature(Path::new("/p"), &order(), &[]).is_err());
    assert_eq!(fs.write_count(), 0);
}

#[test]
fn interrupted_generation_can_be_rerun() {
    let project = project();
    let root = project.path();
    let service = features(&shipped_templates());

    service.add_feature(root, &order(), &sample_records()).unwrap();
    // Simulate a run that stopped after the route was registered.
    fs::remove_dir_all(root.join("src/app/v1/order")).unwrap();

    let report = service.add_feature(root, &order(), &sample_records()).unwrap();

    assert!(!report.route_added);
    assert!(!report.layout_installed);
    assert_eq!(read(root, "src/routes.tsx").matches("/v1/order").count(), 1);
}

#[test]
fn fixtures_last_write_wins() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("mock")).unwrap();
    fs::write(dir.path().join("mock/server.json"), "{}").unwrap();
    let service = features(&shipped_templates());

    let first = sample_records();
    let mut second: Vec<FixtureRecord> = sample_records().into_iter().take(1).collect();
    second[0].age = 99;

    service.register_fixtures(dir.path(), "widgets", &first).unwrap();
    let store: Value = serde_json::from_str(&read(dir.path(), "mock/server.json")).unwrap();
    assert_eq!(store, json!({ "widgets": serde_json::to_value(&first).unwrap() }));

    service.register_fixtures(dir.path(), "widgets", &second).unwrap();
    let store: Value = serde_json::from_str(&read(dir.path(), "mock/server.json")).unwrap();
    assert_eq!(store, json!({ "widgets": serde_json::to_value(&second).unwrap() }));
}

#[test]
fn materializing_twice_is_byte_identical() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let service = scaffold(&shipped_templates());

    service.materialize("website", a.path(), MaterializeMode::Replace).unwrap();
    service.materialize("website", b.path(), MaterializeMode::Replace).unwrap();

    assert!(!snapshot(a.path()).is_empty());
    assert_eq!(snapshot(a.path()), snapshot(b.path()));
}

#[test]
fn missing_template_creates_nothing() {
    let templates = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let destination = target.path().join("app");

    let err = scaffold(templates.path())
        .materialize("website", &destination, MaterializeMode::Replace)
        .unwrap_err();

    assert!(matches!(
        err,
        ForgeError::Application(ApplicationError::TemplateNotFound { .. })
    ));
    assert!(!destination.exists());
}

#[test]
fn generation_works_with_in_memory_adapters() {
    let templates = InMemoryTemplateRepository::new();
    templates
        .insert_tree(TemplateTree::new("example/core/handlers").with_file("sample.ts", "h"))
        .unwrap();
    templates
        .insert_tree(TemplateTree::new("example/core/models").with_file("sample.ts", "m"))
        .unwrap();
    templates
        .insert_tree(TemplateTree::new("example/v1/sample").with_file("page.tsx", "SamplePage"))
        .unwrap();
    templates.insert_file("example/v1/layout.tsx", "layout").unwrap();

    let fs = MemoryFilesystem::new()
        .with_file("/p/src/routes.tsx", "export const routes = [\n];\n")
        .unwrap()
        .with_file("/p/mock/server.json", "{}")
        .unwrap();

    let service = FeatureService::new(
        Arc::new(templates),
        Arc::new(fs.clone()),
        FeatureSettings::default(),
    );
    service
        .add_feature(Path::new("/p"), &EntityName::parse("customer").unwrap(), &[])
        .unwrap();

    assert_eq!(
        fs.read_file(Path::new("/p/src/app/v1/customer/page.tsx")).as_deref(),
        Some("CustomerPage")
    );
    assert!(
        fs.read_file(Path::new("/p/src/routes.tsx"))
            .unwrap()
            .contains("CRUD Customer")
    );
}
