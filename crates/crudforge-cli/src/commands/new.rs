//! Implementation of the `crudforge new` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectRequest`, call the
//! scaffold service, and display results. No business logic lives here.

use std::io::IsTerminal as _;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crudforge_adapters::{CommandBootstrapper, LocalFilesystem};
use crudforge_core::{
    application::{ProjectReport, ProjectRequest, ScaffoldService},
    domain::Starter,
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `crudforge new` command.
///
/// Dispatch sequence:
/// 1. Validate the project name
/// 2. Resolve the starter (flag, prompt, or `defaults.starter`)
/// 3. Confirm with user unless `--yes`, `--quiet` or JSON output
/// 4. Early-exit with a plan if `--dry-run`
/// 5. Create the project via `ScaffoldService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_project_name(&args.name)?;

    let interactive = !args.yes && !global.quiet && !output.is_json();
    let starter = resolve_starter(&args, &config, interactive)?;

    let parent = std::env::current_dir().with_cli_context(|| "failed to read current directory")?;
    let request = build_request(&args, &config, starter, &parent);
    debug!(
        starter = %request.starter,
        bootstrap = request.bootstrap,
        install = request.install,
        "Project request resolved"
    );

    let service = ScaffoldService::new(
        super::template_repository(&global, &config)?,
        Arc::new(LocalFilesystem::new()),
        Arc::new(CommandBootstrapper::new(config.bootstrap.commands())),
    );

    if args.dry_run {
        let plan = service.plan_project(&request)?;
        return show_plan(&plan, &output);
    }

    if interactive {
        show_configuration(&request, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    if !output.is_json() {
        output.header(&format!("Creating '{}'...", request.name))?;
    }
    info!(path = %request.root().display(), "Project creation started");

    let report = service.create_project(&request)?;

    info!(files = report.files.len(), "Project creation completed");
    show_report(&report, &output)
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate_project_name(name: &str) -> CliResult<()> {
    let invalid = |reason: &str| CliError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(invalid("name cannot contain whitespace"));
    }
    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

fn resolve_starter(args: &NewArgs, config: &AppConfig, interactive: bool) -> CliResult<Starter> {
    if let Some(starter) = args.starter {
        return Ok(starter.into());
    }
    if interactive && std::io::stdin().is_terminal() {
        if let Some(starter) = prompt_starter(config.defaults.starter)? {
            return Ok(starter);
        }
    }
    Ok(config.defaults.starter)
}

fn build_request(args: &NewArgs, config: &AppConfig, starter: Starter, parent: &Path) -> ProjectRequest {
    let bootstrap = config.bootstrap.enabled && !args.skip_bootstrap;
    ProjectRequest {
        starter,
        bootstrap,
        install: bootstrap && config.bootstrap.install && !args.skip_install,
        scripts: config.scripts.clone(),
        ..ProjectRequest::new(args.name.clone(), parent)
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_starter(default: Starter) -> CliResult<Option<Starter>> {
    let items: Vec<String> = Starter::ALL
        .iter()
        .map(|s| format!("{:<8} {}", s.as_str(), s.description()))
        .collect();
    let default_index = Starter::ALL.iter().position(|s| *s == default).unwrap_or(0);

    let selection = dialoguer::Select::new()
        .with_prompt("Starter")
        .items(&items)
        .default(default_index)
        .interact_opt()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read starter selection".into(),
            source: Some(Box::new(e)),
        })?;

    match selection {
        Some(index) => Ok(Starter::ALL.get(index).copied()),
        None => Err(CliError::Cancelled),
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_starter(_default: Starter) -> CliResult<Option<Starter>> {
    Ok(None)
}

fn show_configuration(request: &ProjectRequest, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.field("Project:", &request.name)?;
    out.field("Starter:", request.starter.as_str())?;
    out.field("Bootstrap:", yes_no(request.bootstrap))?;
    out.field("Install:", yes_no(request.install))?;
    out.field("Location:", &request.root().display().to_string())?;
    out.print("")?;
    Ok(())
}

fn show_plan(plan: &ProjectReport, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(plan)?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.name,
        plan.root.display()
    ))?;
    out.field("Starter:", plan.starter.as_str())?;
    out.field("Bootstrap:", yes_no(plan.bootstrapped))?;
    out.field("Install:", yes_no(plan.dependencies_installed))?;
    out.field("Files:", &plan.files.len().to_string())?;
    Ok(())
}

fn show_report(report: &ProjectReport, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(report)?;
        return Ok(());
    }

    out.success(&format!("Project '{}' created!", report.name))?;
    if report.bootstrapped && !report.scripts_merged {
        out.warning("package.json not found, scripts were not added")?;
    }
    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", report.name))?;
    out.print("  crudforge add <entity>")?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
