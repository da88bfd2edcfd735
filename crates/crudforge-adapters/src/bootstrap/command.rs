//! Bootstrapper that shells out to external tools.
//!
//! Commands are configured as plain command lines and split on whitespace
//! (no shell is involved). `{name}` in the create command is replaced with
//! the project name. Child processes inherit stdin/stdout/stderr so the
//! user sees the tools' own progress output; they run to completion with
//! no timeout.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info, instrument};

use crudforge_core::{
    application::{ApplicationError, ports::ProjectBootstrapper},
    error::ForgeResult,
};

/// Command lines the bootstrapper runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapCommands {
    /// Creates the project skeleton in the parent directory.
    pub create: String,
    /// Adds runtime packages; the package list is appended.
    pub install: String,
    /// Adds development packages; the package list is appended.
    pub install_dev: String,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

/// Runs [`BootstrapCommands`] with `std::process::Command`.
#[derive(Debug, Clone)]
pub struct CommandBootstrapper {
    commands: BootstrapCommands,
}

impl CommandBootstrapper {
    pub fn new(commands: BootstrapCommands) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &BootstrapCommands {
        &self.commands
    }
}

/// Split `template` into program and arguments, substituting `{name}`.
pub(crate) fn command_line(template: &str, name: &str) -> Vec<String> {
    template
        .split_whitespace()
        .map(|part| part.replace("{name}", name))
        .collect()
}

fn run(argv: &[String], cwd: &Path) -> ForgeResult<()> {
    let command_text = argv.join(" ");
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| ApplicationError::BootstrapFailed {
            command: command_text.clone(),
            reason: "empty command line".into(),
        })?;

    debug!(command = %command_text, cwd = %cwd.display(), "Running command");
    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .map_err(|e| ApplicationError::BootstrapFailed {
            command: command_text.clone(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(ApplicationError::BootstrapFailed {
            command: command_text,
            reason: format!("exited with {status}"),
        }
        .into());
    }
    Ok(())
}

impl ProjectBootstrapper for CommandBootstrapper {
    #[instrument(skip(self), fields(parent = %parent.display()))]
    fn bootstrap(&self, name: &str, parent: &Path) -> ForgeResult<()> {
        info!("Creating project skeleton");
        run(&command_line(&self.commands.create, name), parent)
    }

    #[instrument(skip(self), fields(root = %project_root.display()))]
    fn install_dependencies(&self, project_root: &Path) -> ForgeResult<()> {
        let batches = [
            (&self.commands.install, &self.commands.dependencies),
            (&self.commands.install_dev, &self.commands.dev_dependencies),
        ];

        for (command, packages) in batches {
            if packages.is_empty() {
                continue;
            }
            info!(packages = packages.len(), "Installing packages");
            let mut argv = command_line(command, "");
            argv.extend(packages.iter().cloned());
            run(&argv, project_root)?;
        }
        Ok(())
    }
}
