use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::errors::ConfigError;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub check: Vec<Check>,
}

/// One `[[check]]` table. Which fields are read depends on `rule`.
#[derive(Debug, Deserialize)]
pub struct Check {
    pub rule: String,
    pub value: Option<toml::Value>,
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub bound: Option<toml::Value>,
    pub bounds: Option<Vec<toml::Value>>,
    pub candidates: Option<Vec<toml::Value>>,
    pub pattern: Option<String>,
    pub message: Option<String>,
}

pub fn parse_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    if config.check.is_empty() {
        return Err(ConfigError::EmptyPlan {
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(config)
}
