//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into service calls and render the result.
//! Adapter construction is shared here.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crudforge_adapters::{FsTemplateRepository, discover_templates_dir};
use crudforge_core::{application::FeatureSettings, domain::Placeholder};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod add;
pub mod completions;
pub mod config;
pub mod init;
pub mod new;

/// Locate the template root and open it.
///
/// `--templates` wins over `templates.local_path`; both fall back to the
/// discovery chain of the adapters crate.
pub(crate) fn template_repository(
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<Arc<FsTemplateRepository>> {
    let explicit: Option<PathBuf> = global
        .templates
        .clone()
        .or_else(|| config.templates.local_path.clone());

    let root = discover_templates_dir(explicit.as_deref())
        .ok_or(CliError::TemplatesNotFound { checked: explicit })?;

    debug!(templates = %root.display(), "Template root resolved");
    Ok(Arc::new(FsTemplateRepository::new(root)))
}

/// Substitution settings from the `[substitution]` section.
pub(crate) fn feature_settings(config: &AppConfig) -> CliResult<FeatureSettings> {
    let placeholder = Placeholder::new(config.substitution.placeholder.as_str()).map_err(|e| {
        CliError::ConfigError {
            message: format!("substitution.placeholder: {e}"),
            source: Some(Box::new(e)),
        }
    })?;

    Ok(FeatureSettings {
        placeholder,
        mode: config.substitution.mode,
    })
}
