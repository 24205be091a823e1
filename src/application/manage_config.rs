//! Config management use case

use crate::domain::NamespaceKeying;
use crate::error::{PromptselError, Result};
use crate::infrastructure::{Config, FileSystemRepository, TagRepository};
use std::path::PathBuf;
use std::str::FromStr;

/// Keys accepted by `get` and `set`
pub const CONFIG_KEYS: [&str; 6] = [
    "tags_dir",
    "save_raw_prompt",
    "max_passes",
    "max_repeat",
    "namespace_keying",
    "debug",
];

fn unknown_key(key: &str) -> PromptselError {
    PromptselError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(PromptselError::Config(format!(
            "Invalid value for {}: '{}'. Expected true or false",
            key, value
        ))),
    }
}

fn parse_count<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        PromptselError::Config(format!(
            "Invalid value for {}: '{}'. Expected a whole number",
            key, value
        ))
    })
}

/// Read one key from a config
pub fn get_value(config: &Config, key: &str) -> Result<String> {
    match key {
        "tags_dir" => Ok(config
            .tags_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "save_raw_prompt" => Ok(config.save_raw_prompt.to_string()),
        "max_passes" => Ok(config.max_passes.to_string()),
        "max_repeat" => Ok(config.max_repeat.to_string()),
        "namespace_keying" => Ok(config.namespace_keying.to_string()),
        "debug" => Ok(config.debug.to_string()),
        _ => Err(unknown_key(key)),
    }
}

/// Apply one key to a config, validating the value
pub fn set_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "tags_dir" => {
            config.tags_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        "save_raw_prompt" => config.save_raw_prompt = parse_bool(key, value)?,
        "max_passes" => config.max_passes = parse_count(key, value)?,
        "max_repeat" => config.max_repeat = parse_count(key, value)?,
        "namespace_keying" => {
            config.namespace_keying =
                NamespaceKeying::from_str(value).map_err(PromptselError::Config)?;
        }
        "debug" => config.debug = parse_bool(key, value)?,
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;
        get_value(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        set_value(&mut config, key, value)?;
        self.repository.save_config(&config)
    }

    /// All config values in key order
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.repository.load_config()?;
        CONFIG_KEYS
            .iter()
            .map(|key| get_value(&config, key).map(|value| (*key, value)))
            .collect()
    }
}
