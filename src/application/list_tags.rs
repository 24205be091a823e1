//! List tags use case

use crate::domain::resolver::lookup;
use crate::domain::{TagNode, TagStore};
use crate::error::{PromptselError, Result};
use crate::infrastructure::{FileSystemRepository, TagRepository};
use std::path::PathBuf;

/// Every directive path that ends on a scalar or list under `node`
fn collect_leaf_paths(prefix: &str, node: &TagNode, output: &mut Vec<String>) {
    match node {
        TagNode::Map(children) => {
            for (key, child) in children {
                collect_leaf_paths(&format!("{}:{}", prefix, key), child, output);
            }
        }
        TagNode::Scalar(_) | TagNode::List(_) => output.push(prefix.to_string()),
    }
}

/// Namespaces, or the leaf paths below a colon-separated path
pub fn list_paths(store: &TagStore, path: Option<&str>) -> Result<Vec<String>> {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        return Ok(store.namespaces().keys().cloned().collect());
    };

    let keys: Vec<&str> = path.split(':').collect();
    let node = lookup(store.namespaces(), &keys)
        .map_err(|_| PromptselError::TagNotFound(path.to_string()))?;

    let mut paths = Vec::new();
    collect_leaf_paths(path, node, &mut paths);
    Ok(paths)
}

/// Service for browsing the loaded tag dictionary
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// List namespaces, or leaf paths under `path`
    pub fn execute(&self, path: Option<&str>) -> Result<Vec<String>> {
        let config = self.repository.load_config()?;
        let store = self.repository.load_store(&config);
        list_paths(&store, path)
    }

    /// Absolute paths of all tag files, sorted
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let config = self.repository.load_config()?;
        Ok(self.repository.list_tag_files(&config))
    }
}
