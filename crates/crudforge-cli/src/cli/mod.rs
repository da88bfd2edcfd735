//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crudforge_core::domain::Starter;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudforge",
    bin_name = "crudforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold web apps and generate CRUD features",
    long_about = "crudforge creates web application skeletons from template trees \
                  and generates complete CRUD features (pages, handlers, models, \
                  route entries and mock data) for a named entity.",
    after_help = "EXAMPLES:\n\
        \x20 crudforge new shop --starter example\n\
        \x20 crudforge add order --project-dir ./shop\n\
        \x20 crudforge add customer --dry-run\n\
        \x20 crudforge completions bash > /usr/share/bash-completion/completions/crudforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 crudforge new shop\n\
            \x20 crudforge new shop --starter example --skip-install\n\
            \x20 crudforge new shop --skip-bootstrap --yes"
    )]
    New(NewArgs),

    /// Generate a CRUD feature inside an existing project.
    #[command(
        visible_aliases = ["crud", "new-crud"],
        about = "Generate a CRUD feature for an entity",
        after_help = "EXAMPLES:\n\
            \x20 crudforge add order\n\
            \x20 crudforge add order --project-dir ./shop\n\
            \x20 crudforge add order --fixtures orders.json --dry-run"
    )]
    Add(AddArgs),

    /// Initialise a crudforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crudforge init\n\
            \x20 crudforge init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudforge completions bash > ~/.local/share/bash-completion/completions/crudforge\n\
            \x20 crudforge completions zsh  > ~/.zfunc/_crudforge\n\
            \x20 crudforge completions fish > ~/.config/fish/completions/crudforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the crudforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudforge config get defaults.starter\n\
            \x20 crudforge config list\n\
            \x20 crudforge config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `crudforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; the project is created in the current directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Starter content.
    ///
    /// When omitted, an interactive terminal prompts for it; otherwise
    /// `defaults.starter` from the configuration is used.
    #[arg(
        short = 's',
        long = "starter",
        value_name = "STARTER",
        value_enum,
        help = "Starter content (blank or example)"
    )]
    pub starter: Option<StarterArg>,

    /// Do not run the external project generator.
    #[arg(
        long = "skip-bootstrap",
        help = "Only copy templates, do not run the project generator"
    )]
    pub skip_bootstrap: bool,

    /// Do not install packages after bootstrapping.
    #[arg(long = "skip-install", help = "Do not install dependencies")]
    pub skip_install: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `crudforge add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Entity name, e.g. `order`.
    #[arg(value_name = "ENTITY", help = "Entity to generate a feature for")]
    pub entity: Option<String>,

    /// Root of the target project.
    #[arg(
        short = 'p',
        long = "project-dir",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub project_dir: Option<PathBuf>,

    /// JSON array of fixture records to seed instead of the built-in set.
    #[arg(
        long = "fixtures",
        value_name = "FILE",
        help = "JSON file with mock records for the entity"
    )]
    pub fixtures: Option<PathBuf>,

    /// Preview what would be generated without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crudforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `substitution.placeholder`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Starter content for `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StarterArg {
    /// Base website skeleton only.
    #[value(alias = "empty")]
    Blank,
    /// Skeleton plus the example feature.
    Example,
}

impl From<StarterArg> for Starter {
    fn from(arg: StarterArg) -> Self {
        match arg {
            StarterArg::Blank => Starter::Blank,
            StarterArg::Example => Starter::Example,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["crudforge", "new", "shop", "--starter", "example", "-y"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name, "shop");
                assert_eq!(args.starter, Some(StarterArg::Example));
                assert!(args.yes);
                assert!(!args.skip_bootstrap);
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn empty_is_an_alias_for_blank() {
        let cli = Cli::parse_from(["crudforge", "new", "shop", "--starter", "empty"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.starter.map(Starter::from), Some(Starter::Blank));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn add_accepts_crud_aliases() {
        for alias in ["add", "crud", "new-crud"] {
            let cli = Cli::parse_from(["crudforge", alias, "order", "--project-dir", "shop"]);
            match cli.command {
                Commands::Add(args) => {
                    assert_eq!(args.entity.as_deref(), Some("order"));
                    assert_eq!(args.project_dir, Some(PathBuf::from("shop")));
                }
                other => panic!("expected Add command for {alias}, got {other:?}"),
            }
        }
    }

    #[test]
    fn add_entity_is_optional_at_parse_time() {
        // A missing entity is reported by the command as a domain error.
        let cli = Cli::parse_from(["crudforge", "add"]);
        assert!(matches!(cli.command, Commands::Add(AddArgs { entity: None, .. })));
    }

    #[test]
    fn templates_flag_is_global() {
        let cli = Cli::parse_from(["crudforge", "add", "order", "--templates", "/t"]);
        assert_eq!(cli.global.templates, Some(PathBuf::from("/t")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["crudforge", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
