//! Error types for promptsel

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for promptsel application
#[derive(Debug, Error)]
pub enum PromptselError {
    #[error("Not a promptsel workspace: {0}")]
    NotWorkspace(PathBuf),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PromptselError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptselError::NotWorkspace(_) => 2,
            PromptselError::TagNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PromptselError::NotWorkspace(path) => {
                format!(
                    "Not a promptsel workspace: {}\n\n\
                    Suggestions:\n\
                    • Run 'promptsel init' in this directory to create a workspace\n\
                    • Navigate to an existing promptsel workspace\n\
                    • Set PROMPTSEL_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            PromptselError::TagNotFound(path) => {
                format!(
                    "No tags found under: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'promptsel tags' to see loaded namespaces\n\
                    • Separate nested keys with ':' (e.g., outfits:casual)\n\
                    • Use 'promptsel check' to see tag files that failed to load",
                    path
                )
            }
            PromptselError::Config(msg) => {
                if msg.contains("namespace_keying") {
                    format!(
                        "{}\n\n\
                        Valid values: stem, relative-path\n\
                        Example: promptsel config namespace_keying relative-path",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PromptselError
pub type Result<T> = std::result::Result<T, PromptselError>;

/// Reasons a tag document is skipped while building a store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("YAML parse error in '{namespace}': {message}")]
    Parse { namespace: String, message: String },

    #[error("'{namespace}' is empty")]
    Empty { namespace: String },

    #[error("Unsupported structure in '{namespace}' at '{path}': {message}")]
    Shape {
        namespace: String,
        path: String,
        message: String,
    },
}

/// Failure to turn a key path into a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("key not found: '{key}'")]
    KeyNotFound { key: String },

    #[error("cannot descend into '{key}': not a mapping")]
    ShapeMismatch { key: String },

    #[error("nothing to choose from")]
    EmptyCollection,
}
