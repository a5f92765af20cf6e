//! Logger configuration
//!
//! Capacity settings can be given directly or loaded from a file in one of:
//! - TOML (.toml)
//! - YAML (.yaml, .yml)
//! - JSON (.json)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Error, Result};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// Detect format from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Immutable rotation settings shared by every part of a logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggerConfig {
    max_files: usize,
    max_lines_per_file: usize,
    file_prefix: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_lines_per_file: DEFAULT_MAX_LINES_PER_FILE,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Create a config. Zero selects the default for that field, negative
    /// values are rejected.
    pub fn new(
        max_files: i64,
        max_lines_per_file: i64,
        file_prefix: impl Into<String>,
    ) -> Result<Self> {
        if max_files < 0 || max_lines_per_file < 0 {
            return Err(Error::config("amount and capacity of files must be over 0"));
        }

        let max_files = capacity_or(max_files, DEFAULT_MAX_FILES)?;
        let max_lines_per_file = capacity_or(max_lines_per_file, DEFAULT_MAX_LINES_PER_FILE)?;

        // Every later capacity product relies on this one fitting.
        if max_files.checked_mul(max_lines_per_file).is_none() {
            return Err(Error::config(format!(
                "ring capacity of {} files x {} lines is too large",
                max_files, max_lines_per_file
            )));
        }

        Ok(Self {
            max_files,
            max_lines_per_file,
            file_prefix: file_prefix.into(),
        })
    }

    /// Load config from file, automatically detecting format from extension
    pub fn from_file(path: &Path) -> Result<Self> {
        ConfigFile::load(path)?.into_config()
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }

    pub fn max_lines_per_file(&self) -> usize {
        self.max_lines_per_file
    }

    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    /// Total lines the ring holds before wrapping
    pub fn ring_capacity(&self) -> usize {
        self.max_files * self.max_lines_per_file
    }

    /// Path of the file backing ring slot `index`
    pub fn file_path(&self, index: usize) -> PathBuf {
        PathBuf::from(log_file_name(&self.file_prefix, index))
    }
}

fn capacity_or(value: i64, default: usize) -> Result<usize> {
    if value == 0 {
        return Ok(default);
    }
    usize::try_from(value).map_err(|_| Error::config(format!("capacity {} is out of range", value)))
}

/// Configuration file structure (ringlog.toml/yaml/json)
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub max_files: Option<i64>,
    pub max_lines_per_file: Option<i64>,
    pub file_prefix: Option<String>,
}

impl ConfigFile {
    /// Load config from file, automatically detecting format from extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            Error::ConfigError(format!(
                "Unsupported config file extension: {}. Expected .toml, .yaml, .yml, or .json",
                path.display()
            ))
        })?;

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    /// Parse config content with specified format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Validate and fill in defaults
    pub fn into_config(self) -> Result<LoggerConfig> {
        LoggerConfig::new(
            self.max_files.unwrap_or(0),
            self.max_lines_per_file.unwrap_or(0),
            self.file_prefix.unwrap_or_else(|| DEFAULT_FILE_PREFIX.to_string()),
        )
    }
}

/// Find the first known config file in `dir`, if any
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}
