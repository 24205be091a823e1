//! Configuration management

use crate::domain::expander::{DEFAULT_MAX_PASSES, DEFAULT_MAX_REPEAT};
use crate::domain::NamespaceKeying;
use crate::error::{PromptselError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tags directory used when none is configured
pub const DEFAULT_TAGS_DIR: &str = "tags";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tags directory; relative paths are taken from the workspace root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_dir: Option<PathBuf>,

    /// Record each prompt's pre-expansion text alongside the result
    #[serde(default)]
    pub save_raw_prompt: bool,

    /// Cap on substitution passes per prompt
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,

    /// Ceiling on values drawn by one directive
    #[serde(default = "default_max_repeat")]
    pub max_repeat: u32,

    #[serde(default)]
    pub namespace_keying: NamespaceKeying,

    /// Verbose diagnostics
    #[serde(default)]
    pub debug: bool,
}

fn default_max_passes() -> usize {
    DEFAULT_MAX_PASSES
}

fn default_max_repeat() -> u32 {
    DEFAULT_MAX_REPEAT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tags_dir: None,
            save_raw_prompt: false,
            max_passes: default_max_passes(),
            max_repeat: default_max_repeat(),
            namespace_keying: NamespaceKeying::default(),
            debug: false,
        }
    }
}

impl Config {
    /// Load config from .promptsel/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".promptsel").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PromptselError::NotWorkspace(path.to_path_buf())
            } else {
                PromptselError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| PromptselError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .promptsel/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let state_dir = path.join(".promptsel");
        let config_path = state_dir.join("config.toml");

        if !state_dir.exists() {
            fs::create_dir(&state_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| PromptselError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Absolute tags directory for a workspace rooted at `root`
    pub fn tags_dir(&self, root: &Path) -> PathBuf {
        match &self.tags_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) if !dir.as_os_str().is_empty() => root.join(dir),
            _ => root.join(DEFAULT_TAGS_DIR),
        }
    }
}
