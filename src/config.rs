//! Configuration file support for sat6-currency.
//!
//! Provides YAML-based configuration through `sat6-currency.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::error::CurrencyError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sat6-currency.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server: Option<String>,
    pub username: Option<String>,
    pub search: Option<String>,
    pub advanced: Option<bool>,
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
    if config.unknown_fields.contains_key("password") {
        return Err(invalid(
            "'password' is not read from config files.\n\n\
             💡 Hint: Remove it and pass --password, or let the tool prompt for it.",
        ));
    }
    if let Some(ref server) = config.server {
        if server.trim().is_empty() {
            return Err(invalid(
                "server must not be empty.\n\n\
                 💡 Hint: Use a host name or IP address (e.g., \"satellite.example.com\").",
            ));
        }
    }
    if let Some(ref username) = config.username {
        if username.trim().is_empty() {
            return Err(invalid("username must not be empty."));
        }
    }
    Ok(())
}

fn invalid(message: &str) -> anyhow::Error {
    CurrencyError::Validation {
        message: format!("invalid config: {}", message),
    }
    .into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
