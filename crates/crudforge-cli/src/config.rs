//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CRUDFORGE_<SECTION>__<KEY>`, e.g.
//!    `CRUDFORGE_SUBSTITUTION__PLACEHOLDER=item`
//! 3. Config file: `--config FILE`, else the platform config file, else
//!    `.crudforge.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crudforge_adapters::BootstrapCommands;
use crudforge_core::domain::{Starter, SubstitutionMode};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CRUDFORGE";

/// Local config file name, looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".crudforge.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Placeholder substitution.
    pub substitution: SubstitutionConfig,
    /// External project generator.
    pub bootstrap: BootstrapConfig,
    /// Scripts merged into a new project's `package.json`.
    pub scripts: BTreeMap<String, String>,
    /// Output settings.
    pub output: OutputConfig,
    /// File logging.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub starter: Starter,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstitutionConfig {
    pub placeholder: String,
    pub mode: SubstitutionMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Run `command` when creating a project.
    pub enabled: bool,
    /// Project generator command line; `{name}` is the project name.
    pub command: String,
    /// Install `dependencies` after the generator ran.
    pub install: bool,
    pub install_command: String,
    pub install_dev_command: String,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for a daily log file; no file logging when unset.
    pub directory: Option<PathBuf>,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            placeholder: "sample".into(),
            mode: SubstitutionMode::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

const DEPENDENCIES: &[&str] = &[
    "@hookform/resolvers@^3.9.0",
    "@radix-ui/react-avatar@^1.1.0",
    "@radix-ui/react-checkbox@^1.1.1",
    "@radix-ui/react-dialog@^1.1.1",
    "@radix-ui/react-dropdown-menu@^2.1.1",
    "@radix-ui/react-label@^2.1.0",
    "@radix-ui/react-menubar@^1.1.1",
    "@radix-ui/react-popover@^1.1.1",
    "@radix-ui/react-select@^2.1.1",
    "@radix-ui/react-separator@^1.1.0",
    "@radix-ui/react-slot@^1.1.0",
    "@radix-ui/react-toast@^1.2.1",
    "@radix-ui/react-tooltip@^1.1.2",
    "@tanstack/react-query@^5.51.23",
    "@tanstack/react-table@^8.20.1",
    "axios@^1.7.3",
    "class-variance-authority@^0.7.0",
    "clsx@^2.1.1",
    "dayjs@^1.11.12",
    "jotai@^2.9.2",
    "js-cookie@^3.0.5",
    "lucide-react@^0.426.0",
    "next@14.2.5",
    "react@^18.3.1",
    "react-dom@^18.3.1",
    "react-hook-form@^7.52.2",
    "react-icons@^5.2.1",
    "tailwind-merge@^2.4.0",
    "tailwindcss-animate@^1.0.7",
    "uuid@^10.0.0",
    "zod@^3.23.8",
];

const DEV_DEPENDENCIES: &[&str] = &[
    "@types/js-cookie@^3.0.6",
    "@types/node@^20.14.14",
    "@types/react@^18.3.3",
    "@types/react-dom@^18.3.0",
    "@types/uuid@^10.0.0",
    "eslint@^8",
    "eslint-config-next@14.2.5",
    "eslint-plugin-prettier@^5.2.1",
    "globals@^15.9.0",
    "json-server@^1.0.0-beta.1",
    "postcss@^8.4.41",
    "prettier@^3.3.3",
    "tailwindcss@^3.4.9",
    "typescript@^5.5.4",
    "typescript-eslint@^8.0.1",
];

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "bunx create-next-app@latest {name} --typescript --turbo --eslint \
                      --tailwind --src-dir --app --skip-install --use-bun --empty \
                      --no-import-alias"
                .into(),
            install: true,
            install_command: "bun add".into(),
            install_dev_command: "bun add --dev".into(),
            dependencies: DEPENDENCIES.iter().map(|s| s.to_string()).collect(),
            dev_dependencies: DEV_DEPENDENCIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BootstrapConfig {
    /// Command set handed to the bootstrapper adapter.
    pub fn commands(&self) -> BootstrapCommands {
        BootstrapCommands {
            create: self.command.clone(),
            install: self.install_command.clone(),
            install_dev: self.install_dev_command.clone(),
            dependencies: self.dependencies.clone(),
            dev_dependencies: self.dev_dependencies.clone(),
        }
    }
}

/// Scripts every new project gets unless configured otherwise.
fn default_scripts() -> BTreeMap<String, String> {
    BTreeMap::from([(
        "server".to_string(),
        "json-server --watch ./mock/server.json --port 3333".to_string(),
    )])
}

impl AppConfig {
    /// Built-in defaults, including the default `scripts` table.
    pub fn builtin() -> Self {
        Self {
            scripts: default_scripts(),
            ..Self::default()
        }
    }

    /// Load configuration: defaults, then a TOML file, then the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist when
    /// `require_file` is set. The implicit locations are always optional.
    pub fn load(config_file: Option<&PathBuf>, require_file: bool) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::builtin())
            .context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(require_file),
            ),
            None => {
                let path = Self::config_path();
                builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(false),
                )
            }
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| match config_file {
                Some(path) => format!("Failed to read configuration from '{}'", path.display()),
                None => "Failed to read configuration".to_string(),
            })?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// A `.crudforge.toml` in the current directory wins; otherwise the
    /// platform config dir from `directories::ProjectDirs`.
    pub fn config_path() -> PathBuf {
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return local.to_path_buf();
        }
        Self::global_config_path()
    }

    /// Platform config file, falling back to the local file name.
    pub fn global_config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crudforge", "crudforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}
