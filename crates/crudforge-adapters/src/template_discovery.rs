//! Template directory discovery.
//!
//! # Resolution order
//!
//! Candidates are probed in this order, stopping at the first directory that
//! looks like a template repository (it has a `website/` or `example/`
//! subdirectory):
//!
//! 1. **explicit** directory: `--templates DIR` or `templates.local_path`
//!    from the configuration file.
//! 2. **`$CRUDFORGE_TEMPLATES_DIR`**: environment variable override.
//! 3. **`./templates`**: relative to the current working directory.
//! 4. **`<executable-dir>/templates`**: sibling to the `crudforge` binary.
//! 5. **`../templates`**: one level above CWD, convenient when running from
//!    `target/debug/`.
//!
//! If nothing matches, [`discover_templates_dir`] returns `None` and emits a
//! `WARN` event; the CLI turns that into an actionable error.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crudforge_core::domain::TemplateLayout;

/// Environment variable naming a template directory.
pub const TEMPLATES_DIR_ENV: &str = "CRUDFORGE_TEMPLATES_DIR";

// ── Public API ────────────────────────────────────────────────────────────────

/// Find the template directory, honouring `explicit` first.
#[instrument(skip_all)]
pub fn discover_templates_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    for candidate in candidate_paths(explicit) {
        debug!(path = %candidate.display(), "checking candidate templates path");

        if !is_template_root(&candidate) {
            debug!(path = %candidate.display(), "not a template directory, skipping");
            continue;
        }

        info!(path = %candidate.display(), "using templates directory");
        return Some(candidate);
    }

    warn!(
        "no templates directory found; checked --templates, ${TEMPLATES_DIR_ENV}, \
         ./templates, <exe>/templates, and ../templates"
    );
    None
}

/// True if `dir` contains at least one of the top-level template trees.
pub fn is_template_root(dir: &Path) -> bool {
    dir.join(TemplateLayout::WEBSITE).is_dir() || dir.join("example").is_dir()
}

// ── Resolution helpers ────────────────────────────────────────────────────────

/// Build the ordered list of candidate paths to probe.
fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(5);

    // 1. Command line / configuration.
    if let Some(dir) = explicit {
        paths.push(dir.to_path_buf());
    }

    // 2. Explicit environment variable.
    if let Ok(env_dir) = std::env::var(TEMPLATES_DIR_ENV) {
        let p = PathBuf::from(env_dir);
        debug!(path = %p.display(), "candidate from ${TEMPLATES_DIR_ENV}");
        paths.push(p);
    }

    // 3. ./templates (CWD-relative).
    paths.push(PathBuf::from("templates"));

    // 4. <executable-dir>/templates.
    if let Some(exe_sibling) = exe_sibling_templates() {
        debug!(path = %exe_sibling.display(), "candidate from exe sibling");
        paths.push(exe_sibling);
    }

    // 5. ../templates (development fallback).
    paths.push(PathBuf::from("../templates"));

    paths
}

/// Return `<directory of current executable>/templates`, or `None` if the
/// executable path cannot be determined (some platforms / test runners).
fn exe_sibling_templates() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
}
