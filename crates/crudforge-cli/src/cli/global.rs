//! Flags accepted before or after any crudforge subcommand.

use clap::{Args, builder::FalseyValueParser};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more while scaffolding: `-v` shows each generation step, `-vv`
    /// every file written, command run and template loaded.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more detail (-v steps, -vv files and commands, -vvv trace)",
        long_help = "Log more detail to stderr:
    (none)  - warnings and errors only
    -v      - generation steps (templates, routes, fixtures)
    -vv     - files written, commands run, templates loaded
    -vvv    - trace level
RUST_LOG overrides this flag."
    )]
    pub verbose: u8,

    /// Print errors only. Reports and next-step hints are skipped.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain output. Any non-empty `NO_COLOR` other than `0`/`false` turns it on.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of .crudforge.toml or the user config"
    )]
    pub config: Option<PathBuf>,

    /// Directory holding `website/` and `example/`.
    ///
    /// Overrides `templates.local_path` and `$CRUDFORGE_TEMPLATES_DIR`.
    #[arg(
        long = "templates",
        global = true,
        value_name = "DIR",
        help = "Directory holding the template trees"
    )]
    pub templates: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How reports and plans are printed"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Coloured report lines.
    Human,
    /// Uncoloured report lines.
    Plain,
    /// Feature reports and dry-run plans as JSON.
    Json,
}
