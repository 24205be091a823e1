//! In-memory tag dictionary built from YAML documents

use crate::domain::node::{TagMap, TagNode, YamlNode};
use crate::error::DocumentError;
use log::{info, warn};
use std::path::PathBuf;

/// Raw tag document waiting to be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Key the parsed tree is registered under
    pub namespace: String,
    /// Where the text came from (for diagnostics only)
    pub origin: PathBuf,
    pub content: String,
}

impl SourceDocument {
    pub fn new(namespace: impl Into<String>, origin: PathBuf, content: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            origin,
            content: content.into(),
        }
    }
}

/// A document that was skipped while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDiagnostic {
    pub origin: PathBuf,
    pub error: DocumentError,
}

/// Namespace-keyed tag trees. Rebuilt wholesale, never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct TagStore {
    namespaces: TagMap,
    diagnostics: Vec<LoadDiagnostic>,
}

impl TagStore {
    /// Build a fresh store from documents, in order.
    ///
    /// Broken or empty documents are skipped and recorded as diagnostics,
    /// as are list entries that are not plain values.
    /// A later document with the same namespace replaces an earlier one.
    pub fn load<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = SourceDocument>,
    {
        let mut store = TagStore::default();

        for document in documents {
            match parse_document(&document) {
                Ok((root, issues)) => {
                    for error in issues {
                        warn!("{}: {}", document.origin.display(), error);
                        store.diagnostics.push(LoadDiagnostic {
                            origin: document.origin.clone(),
                            error,
                        });
                    }
                    if store.namespaces.contains_key(&document.namespace) {
                        warn!(
                            "{} replaces previously loaded namespace '{}'",
                            document.origin.display(),
                            document.namespace
                        );
                    }
                    store.namespaces.insert(document.namespace, root);
                }
                Err(error) => {
                    warn!("Skipping {}: {}", document.origin.display(), error);
                    store.diagnostics.push(LoadDiagnostic {
                        origin: document.origin,
                        error,
                    });
                }
            }
        }

        info!(
            "Loaded {} tag namespace(s), skipped {}",
            store.namespaces.len(),
            store.diagnostics.len()
        );
        store
    }

    /// Store built directly from trees (no parsing)
    pub fn from_namespaces(namespaces: TagMap) -> Self {
        Self {
            namespaces,
            diagnostics: Vec::new(),
        }
    }

    /// Root mapping: namespace -> tree
    pub fn namespaces(&self) -> &TagMap {
        &self.namespaces
    }

    pub fn get(&self, namespace: &str) -> Option<&TagNode> {
        self.namespaces.get(namespace)
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Documents skipped during the load that built this store
    pub fn diagnostics(&self) -> &[LoadDiagnostic] {
        &self.diagnostics
    }
}

fn parse_document(
    document: &SourceDocument,
) -> Result<(TagNode, Vec<DocumentError>), DocumentError> {
    let empty = || DocumentError::Empty {
        namespace: document.namespace.clone(),
    };

    let has_content = document.content.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if !has_content {
        return Err(empty());
    }

    let value: YamlNode =
        serde_yaml::from_str(&document.content).map_err(|e| DocumentError::Parse {
            namespace: document.namespace.clone(),
            message: e.to_string(),
        })?;

    if value.is_null() {
        return Err(empty());
    }

    let (root, issues) = TagNode::from_yaml(value);
    if root.is_empty() {
        return Err(empty());
    }

    let issues = issues
        .into_iter()
        .map(|e| DocumentError::Shape {
            namespace: document.namespace.clone(),
            path: e.path,
            message: e.message,
        })
        .collect();
    Ok((root, issues))
}
