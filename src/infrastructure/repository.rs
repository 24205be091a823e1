//! File system repository

use crate::domain::{NamespaceKeying, SourceDocument, TagStore};
use crate::error::{PromptselError, Result};
use crate::infrastructure::Config;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions recognised as tag files
const TAG_FILE_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Abstract repository for workspace operations
pub trait TagRepository {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .promptsel/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .promptsel/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .promptsel directory exists
    fn is_initialized(&self) -> bool;

    /// Create .promptsel directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TagRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks PROMPTSEL_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("PROMPTSEL_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_state_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(PromptselError::Config(format!(
                    "PROMPTSEL_ROOT is set to '{}' but no .promptsel directory found. \
                    Run 'promptsel init' in that directory or unset PROMPTSEL_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_state_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(PromptselError::NotWorkspace(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .promptsel directory
    fn has_state_dir(path: &Path) -> bool {
        path.join(".promptsel").is_dir()
    }
}

impl TagRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_state_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let state_dir = self.root.join(".promptsel");

        if state_dir.exists() {
            return Err(PromptselError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&state_dir)?;
        Ok(())
    }
}

/// Whether `path` names a tag file
pub fn is_tag_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TAG_FILE_EXTENSIONS.contains(&ext))
}

/// All tag files under `dir`, as paths relative to it, sorted.
/// Hidden directories are not entered. A missing directory yields nothing.
pub fn collect_tag_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir).into_iter().filter_entry(|entry| {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .is_none_or(|name| !name.starts_with('.'))
    });

    for entry in walker {
        let Ok(entry) = entry else {
            continue;
        };
        if !entry.file_type().is_file() || !is_tag_file(entry.path()) {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(dir) else {
            continue;
        };
        files.push(rel.to_path_buf());
    }

    files.sort();
    files
}

// Tag file operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Tags directory according to the workspace config
    pub fn tags_dir(&self, config: &Config) -> PathBuf {
        config.tags_dir(&self.root)
    }

    /// Absolute paths of every tag file, sorted
    pub fn list_tag_files(&self, config: &Config) -> Vec<PathBuf> {
        let dir = self.tags_dir(config);
        collect_tag_files(&dir)
            .into_iter()
            .map(|rel| dir.join(rel))
            .collect()
    }

    /// Read every tag file into a document keyed per `config.namespace_keying`.
    /// Unreadable files are skipped with a warning.
    pub fn read_documents(&self, config: &Config) -> Vec<SourceDocument> {
        let dir = self.tags_dir(config);
        read_documents_from(&dir, config.namespace_keying)
    }

    /// Build a fresh tag store from the current tag files
    pub fn load_store(&self, config: &Config) -> TagStore {
        TagStore::load(self.read_documents(config))
    }
}

/// Read every tag file under `dir` in sorted order
pub fn read_documents_from(dir: &Path, keying: NamespaceKeying) -> Vec<SourceDocument> {
    let mut documents = Vec::new();

    for rel in collect_tag_files(dir) {
        let path = dir.join(&rel);
        let Some(namespace) = keying.namespace_for(&rel) else {
            warn!("Skipping {}: file name is not valid UTF-8", path.display());
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(content) => documents.push(SourceDocument::new(namespace, path, content)),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    documents
}
