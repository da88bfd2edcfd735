//! Implementation of the `crudforge add` command.
//!
//! Responsibility: resolve the project root and entity, call the feature
//! service, and display results. No generation logic lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use crudforge_adapters::LocalFilesystem;
use crudforge_core::{
    application::{FeaturePlan, FeatureReport, FeatureService},
    domain::{EntityName, FixtureRecord, sample_records},
};

use crate::{
    cli::{AddArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `crudforge add` command.
///
/// 1. Validate the entity name (`MissingArgument` / `InvalidEntityName`)
/// 2. Resolve the project root (`--project-dir` or the current directory)
/// 3. Load fixture records (`--fixtures` or the built-in set)
/// 4. Plan (`--dry-run`) or generate via `FeatureService`
#[instrument(skip_all, fields(entity = args.entity.as_deref().unwrap_or("")))]
pub fn execute(
    args: AddArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let entity = parse_entity(args.entity.as_deref())?;
    let project_root = resolve_project_root(args.project_dir)?;
    let records = match &args.fixtures {
        Some(path) => load_fixtures(path)?,
        None => sample_records(),
    };

    let service = FeatureService::new(
        super::template_repository(&global, &config)?,
        Arc::new(LocalFilesystem::new()),
        super::feature_settings(&config)?,
    );

    if args.dry_run {
        let plan = service.plan(&project_root, &entity)?;
        return show_plan(&plan, records.len(), &output);
    }

    if !output.is_json() {
        output.header(&format!("Generating CRUD feature '{entity}'..."))?;
    }
    let report = service.add_feature(&project_root, &entity, &records)?;
    info!(files = report.files_written.len(), "Feature generated");

    show_report(&report, &output)
}

/// Entity argument to [`EntityName`]; absent or blank is `MissingArgument`.
pub fn parse_entity(raw: Option<&str>) -> CliResult<EntityName> {
    EntityName::parse(raw.unwrap_or_default()).map_err(|e| CliError::Core(e.into()))
}

fn resolve_project_root(project_dir: Option<PathBuf>) -> CliResult<PathBuf> {
    match project_dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().with_cli_context(|| "failed to read current directory"),
    }
}

/// Read a JSON array of fixture records.
pub fn load_fixtures(path: &Path) -> CliResult<Vec<FixtureRecord>> {
    let text = std::fs::read_to_string(path)
        .with_cli_context(|| format!("failed to read fixtures '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_cli_context(|| format!("invalid fixtures file '{}'", path.display()))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &FeaturePlan, records: usize, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(plan)?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would generate '{}' in {}",
        plan.entity,
        plan.project_root.display()
    ))?;
    for file in &plan.files {
        out.print(&format!("  + {}", relative(file, &plan.project_root)))?;
    }
    if let Some(layout) = &plan.layout {
        out.print(&format!("  + {}", relative(layout, &plan.project_root)))?;
    }
    out.field("Fixtures:", &format!("{records} records under '{}'", plan.collection_key))?;
    out.field("Route:", &plan.route.render())?;
    Ok(())
}

fn show_report(report: &FeatureReport, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(report)?;
        return Ok(());
    }

    out.success(&format!("Feature '{}' generated!", report.entity))?;
    out.field("Files:", &report.files_written.len().to_string())?;
    out.field("Fixtures:", &report.collection_key)?;
    if report.layout_installed {
        out.field("Layout:", "installed")?;
    }
    if !report.route_added {
        out.warning("Route already listed, route list left unchanged")?;
    }
    Ok(())
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
