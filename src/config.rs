//! Configuration file support for orbyte-console.
//!
//! Provides YAML-based configuration through `orbyte.config.yml` files and
//! resolves the settings every command needs at startup.

use anyhow::{bail, Context};
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::error::DashboardError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "orbyte.config.yml";

/// API root used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the configured API root
pub const API_URL_ENV: &str = "ORBYTE_API_URL";

pub const DEFAULT_SOURCE_REGION: &str = "us-central1";
pub const DEFAULT_TARGET_REGION: &str = "us-west1";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub format: Option<String>,
    pub source_region: Option<String>,
    pub target_region: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.api_base_url {
        if url.trim().is_empty() {
            bail!(
                "Invalid config: api_base_url must not be empty.\n\n\
                 💡 Hint: Use the API root including /api (e.g., \"http://localhost:8000/api\")."
            );
        }
    }

    if let Some(ref format) = config.format {
        OutputFormat::from_str(format).map_err(|reason| DashboardError::InvalidConfig {
            path: "format".to_string(),
            reason,
        })?;
    }

    for (field, region) in [
        ("source_region", &config.source_region),
        ("target_region", &config.target_region),
    ] {
        if region.as_deref().is_some_and(|r| r.trim().is_empty()) {
            bail!("Invalid config: {} must not be empty.", field);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored.", key);
    }
}

/// Settings every command runs with, after precedence is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub format: OutputFormat,
    pub source_region: String,
    pub target_region: String,
}

impl Settings {
    /// Applies precedence: command line (including `ORBYTE_API_URL`, which
    /// clap folds into `--api-url`) over config file over defaults.
    pub fn resolve(
        cli_api_url: Option<&str>,
        cli_format: Option<OutputFormat>,
        config: Option<&ConfigFile>,
    ) -> Result<Self> {
        let config_format = config
            .and_then(|c| c.format.as_deref())
            .map(OutputFormat::from_str)
            .transpose()
            .map_err(|reason| DashboardError::InvalidConfig {
                path: "format".to_string(),
                reason,
            })?;

        let api_base_url = cli_api_url
            .map(str::to_string)
            .or_else(|| config.and_then(|c| c.api_base_url.clone()))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            api_base_url,
            format: cli_format.or(config_format).unwrap_or_default(),
            source_region: config
                .and_then(|c| c.source_region.clone())
                .unwrap_or_else(|| DEFAULT_SOURCE_REGION.to_string()),
            target_region: config
                .and_then(|c| c.target_region.clone())
                .unwrap_or_else(|| DEFAULT_TARGET_REGION.to_string()),
        })
    }
}
