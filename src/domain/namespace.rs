//! Namespace keys derived from tag file paths

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How a tag file's path becomes its namespace key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NamespaceKeying {
    /// File stem only (`tags/people/hair.yml` -> `hair`). Files sharing a
    /// stem in different directories replace each other.
    #[default]
    Stem,
    /// Path relative to the tags directory, without extension
    /// (`tags/people/hair.yml` -> `people/hair`)
    RelativePath,
}

impl NamespaceKeying {
    /// Namespace for a file given its path relative to the tags directory.
    /// Returns None for paths that are not valid UTF-8 or have no stem.
    pub fn namespace_for(&self, relative: &Path) -> Option<String> {
        let stem = relative.file_stem()?.to_str()?;

        match self {
            NamespaceKeying::Stem => Some(stem.to_string()),
            NamespaceKeying::RelativePath => {
                let mut parts: Vec<&str> = match relative.parent() {
                    Some(parent) => parent
                        .iter()
                        .map(|part| part.to_str())
                        .collect::<Option<_>>()?,
                    None => Vec::new(),
                };
                parts.push(stem);
                Some(parts.join("/"))
            }
        }
    }
}

impl FromStr for NamespaceKeying {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stem" => Ok(NamespaceKeying::Stem),
            "relative-path" | "relative_path" | "path" => Ok(NamespaceKeying::RelativePath),
            _ => Err(format!(
                "Invalid namespace_keying: '{}'. Valid values are: stem, relative-path",
                s
            )),
        }
    }
}

impl fmt::Display for NamespaceKeying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamespaceKeying::Stem => write!(f, "stem"),
            NamespaceKeying::RelativePath => write!(f, "relative-path"),
        }
    }
}
