//! Integration tests for the crudforge binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

/// The binary, isolated from the host's config, log level and colours.
fn crudforge(cwd: &Path, templates: &Path) -> Command {
    let mut cmd = Command::cargo_bin("crudforge").unwrap();
    cmd.current_dir(cwd)
        .env("CRUDFORGE_TEMPLATES_DIR", templates)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env("HOME", cwd)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// A blank project named `shop` inside `dir`, created without the generator.
fn blank_project(dir: &Path) -> PathBuf {
    crudforge(dir, &shipped_templates())
        .args(["new", "shop", "--skip-bootstrap", "--yes"])
        .assert()
        .success();
    dir.join("shop")
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("add"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_blank_project() {
    let dir = TempDir::new().unwrap();
    let root = blank_project(dir.path());

    assert!(root.join("src/routes.tsx").is_file());
    let store: Value =
        serde_json::from_str(&fs::read_to_string(root.join("mock/server.json")).unwrap()).unwrap();
    assert_eq!(store, serde_json::json!({}));
    assert!(!root.join("src/core/handlers/sample.ts").exists());
}

#[test]
fn test_new_example_project() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .args(["new", "shop", "--starter", "example", "--skip-bootstrap", "-y"])
        .assert()
        .success();

    // The example pages merge into src/app as-is; only `add` uses src/app/v1.
    let root = dir.path().join("shop");
    assert!(root.join("src/app/sample/page.tsx").is_file());
    assert!(root.join("src/app/layout.tsx").is_file());
    assert!(root.join("src/core/handlers/sample.ts").is_file());
    assert!(!root.join("src/app/v1").exists());
}

#[test]
fn test_new_existing_project_is_refused() {
    let dir = TempDir::new().unwrap();
    blank_project(dir.path());

    crudforge(dir.path(), &shipped_templates())
        .args(["new", "shop", "--skip-bootstrap", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_new_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .args(["new", "shop", "--skip-bootstrap", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!dir.path().join("shop").exists());
}

#[test]
fn test_add_order_feature() {
    let dir = TempDir::new().unwrap();
    let root = blank_project(dir.path());

    crudforge(dir.path(), &shipped_templates())
        .args(["add", "order", "--project-dir"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Feature 'order' generated"));

    let routes = fs::read_to_string(root.join("src/routes.tsx")).unwrap();
    assert_eq!(routes.matches("url: \"/v1/order\"").count(), 1);
    assert!(routes.contains("label: \"CRUD Order\""));

    let store: Value =
        serde_json::from_str(&fs::read_to_string(root.join("mock/server.json")).unwrap()).unwrap();
    assert_eq!(store["orders"].as_array().map(Vec::len), Some(3));
    assert_eq!(store["orders"][0]["firstName"], "Alexander");

    let page = fs::read_to_string(root.join("src/app/v1/order/page.tsx")).unwrap();
    assert!(page.contains("OrderPage"));
    assert!(!page.contains("sample") && !page.contains("Sample"));
}

#[test]
fn test_add_uses_current_directory_by_default() {
    let dir = TempDir::new().unwrap();
    let root = blank_project(dir.path());

    crudforge(&root, &shipped_templates())
        .args(["crud", "customer"])
        .assert()
        .success();

    assert!(root.join("src/app/v1/customer/page.tsx").is_file());
}

#[test]
fn test_add_twice_is_refused() {
    let dir = TempDir::new().unwrap();
    let root = blank_project(dir.path());

    crudforge(&root, &shipped_templates())
        .args(["add", "order"])
        .assert()
        .success();
    let routes = fs::read_to_string(root.join("src/routes.tsx")).unwrap();

    crudforge(&root, &shipped_templates())
        .args(["add", "order"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Feature 'order' already exists"));

    assert_eq!(fs::read_to_string(root.join("src/routes.tsx")).unwrap(), routes);
}

#[test]
fn test_add_dry_run_json() {
    let dir = TempDir::new().unwrap();
    let root = blank_project(dir.path());

    let assert = crudforge(&root, &shipped_templates())
        .args(["--output-format", "json", "add", "order", "--dry-run"])
        .assert()
        .success();

    let plan: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(plan["collection_key"], "orders");
    assert_eq!(plan["route"]["url"], "/v1/order");
    assert!(!root.join("src/app/v1/order").exists());
}

#[test]
fn test_add_with_fixtures_file() {
    let dir = TempDir::new().unwrap();
    let root = blank_project(dir.path());
    let fixtures = dir.path().join("orders.json");
    fs::write(
        &fixtures,
        r#"[{"id":"45f6402e-f4be-43e4-973c-b13bc5e9e949","firstName":"Ada","lastName":"Lovelace","age":36,"email":"ada@example.com","password":"x"}]"#,
    )
    .unwrap();

    crudforge(&root, &shipped_templates())
        .args(["add", "order", "--fixtures"])
        .arg(&fixtures)
        .assert()
        .success();

    let store: Value =
        serde_json::from_str(&fs::read_to_string(root.join("mock/server.json")).unwrap()).unwrap();
    assert_eq!(store["orders"].as_array().map(Vec::len), Some(1));
    assert_eq!(store["orders"][0]["firstName"], "Ada");
}

#[test]
fn test_no_color_env_disables_colour() {
    let dir = TempDir::new().unwrap();
    let root = blank_project(dir.path());

    for value in ["1", "true", "0"] {
        crudforge(&root, &shipped_templates())
            .env("NO_COLOR", value)
            .args(["add", "order", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

#[test]
fn test_config_get_and_path() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .args(["config", "get", "defaults.starter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blank"));

    crudforge(dir.path(), &shipped_templates())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_env_overrides_config() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .env("CRUDFORGE_SUBSTITUTION__PLACEHOLDER", "item")
        .args(["config", "get", "substitution.placeholder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("item"));
}

#[test]
fn test_init_writes_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("crudforge.toml");

    crudforge(dir.path(), &shipped_templates())
        .args(["init", "--config"])
        .arg(&path)
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[bootstrap]"));
    assert!(text.contains("placeholder = \"sample\""));
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudforge"));
}
