//! Tag file health check use case

use crate::domain::{LoadDiagnostic, TagStore};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TagRepository};
use std::path::PathBuf;

/// Outcome of loading the workspace's tag files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub tags_dir: PathBuf,
    pub files: usize,
    pub namespaces: usize,
    pub skipped: Vec<LoadDiagnostic>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Service that loads every tag file and reports what was skipped
pub struct CheckTagsService {
    repository: FileSystemRepository,
}

impl CheckTagsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<CheckReport> {
        let config = self.repository.load_config()?;
        let documents = self.repository.read_documents(&config);
        let files = documents.len();
        let store = TagStore::load(documents);

        Ok(CheckReport {
            tags_dir: self.repository.tags_dir(&config),
            files,
            namespaces: store.len(),
            skipped: store.diagnostics().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    fn workspace() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::default()).unwrap();
        fs::create_dir(temp.path().join("tags")).unwrap();
        (temp, repo)
    }

    #[test]
    fn check_reports_broken_files() {
        let (temp, repo) = workspace();
        fs::write(temp.path().join("tags/good.yml"), "a: [b]").unwrap();
        fs::write(temp.path().join("tags/bad.yml"), "a: [b").unwrap();
        fs::write(temp.path().join("tags/empty.yml"), "").unwrap();

        let report = CheckTagsService::new(repo).execute().unwrap();

        assert_eq!(report.files, 3);
        assert_eq!(report.namespaces, 1);
        assert!(!report.is_clean());
        assert_eq!(report.skipped.len(), 2);
        assert!(matches!(report.skipped[0].error, DocumentError::Parse { .. }));
        assert!(matches!(report.skipped[1].error, DocumentError::Empty { .. }));
    }

    #[test]
    fn check_clean_workspace() {
        let (temp, repo) = workspace();
        fs::write(temp.path().join("tags/good.yml"), "a: [b]").unwrap();

        let report = CheckTagsService::new(repo).execute().unwrap();
        assert!(report.is_clean());
        assert_eq!(report.namespaces, 1);
    }
}
