//! Tests for error messages, suggestions and exit codes.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

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

#[test]
fn test_error_missing_entity() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .arg("add")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Required argument missing: entity"));
}

#[test]
fn test_error_invalid_entity() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .args(["add", "9lives"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid entity name"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_error_invalid_project_name() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .args(["new", ".hidden", "--skip-bootstrap", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_error_templates_not_found() {
    let dir = TempDir::new().unwrap();
    let empty = TempDir::new().unwrap();

    crudforge(dir.path(), empty.path())
        .args(["add", "order"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Templates directory not found"))
        .stderr(predicate::str::contains("--templates"));
}

#[test]
fn test_error_missing_template_tree() {
    // A template root with only the skeleton: the feature trees are missing.
    let dir = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    std::fs::create_dir_all(templates.path().join("website")).unwrap();

    crudforge(dir.path(), templates.path())
        .args(["add", "order"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));

    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_error_missing_store() {
    // Not a generated project: no mock/server.json to register fixtures in.
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .args(["add", "order"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Mock data store not found"));
}

#[test]
fn test_error_missing_config_file() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .args(["--config", "does-not-exist.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_unknown_config_key() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .args(["config", "get", "defaults.language"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_unknown_starter() {
    let dir = TempDir::new().unwrap();
    crudforge(dir.path(), &shipped_templates())
        .args(["new", "shop", "--starter", "fancy"])
        .assert()
        .code(2);
}
