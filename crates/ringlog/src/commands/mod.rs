//! Command implementations

pub mod log;
pub mod show_config;
pub mod trial;

use anyhow::{Context, Result};
use ringlog_core::{find_config_file, ConfigFile, LoggerConfig};
use tracing::debug;

use crate::cli::Cli;

/// Resolve the logger config: flags override the config file, which
/// overrides defaults. Without `--config`, a `ringlog.*` file in the
/// current directory is used if present.
pub fn resolve_config(cli: &Cli) -> Result<LoggerConfig> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => find_config_file(&std::env::current_dir()?),
    };

    let mut file = match path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            ConfigFile::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => ConfigFile::default(),
    };

    if let Some(n) = cli.max_files {
        file.max_files = Some(n);
    }
    if let Some(n) = cli.max_lines {
        file.max_lines_per_file = Some(n);
    }
    if let Some(prefix) = &cli.prefix {
        file.file_prefix = Some(prefix.clone());
    }

    Ok(file.into_config()?)
}
