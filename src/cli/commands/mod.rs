//! Command execution for release preparation.

mod finalize;
mod release;
mod resolve;

use super::{Command, RuntimeConfig, VersionArgs};
use crate::{
    error::{CliError, Result},
    metadata::VersionCatalog,
};
use std::path::Path;

/// Dispatch a parsed command. Returns the process exit code.
pub async fn execute(command: &Command, config: &RuntimeConfig) -> Result<i32> {
    match command {
        Command::Resolve(args) => resolve::execute(args, config),
        Command::Finalize(args) => finalize::execute(args, config).await,
        Command::Release(args) => release::execute(args, config).await,
    }
}

/// Version tag from `--version-tag`, else from the catalog.
///
/// `default_catalog` is consulted when no `--version-catalog` was given.
pub(crate) fn resolve_version(
    args: &VersionArgs,
    default_catalog: Option<&Path>,
    config: &RuntimeConfig,
) -> Result<String> {
    if let Some(tag) = &args.version_tag {
        return Ok(tag.clone());
    }

    let catalog_path = args
        .version_catalog
        .as_deref()
        .or(default_catalog)
        .ok_or_else(|| CliError::MissingArgument {
            argument: "--version-tag or --version-catalog".to_string(),
        })?;

    config.verbose_println(&format!(
        "Reading version from {}",
        catalog_path.display()
    ))?;
    let version = VersionCatalog::load(catalog_path)?.version_name()?;
    log::debug!("Version tag from catalog: {}", version);
    Ok(version)
}
