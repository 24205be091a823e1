//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::samples::{provision, SampleSource};
use crate::infrastructure::{Config, FileSystemRepository, TagRepository};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory next to the tags directory whose files seed new workspaces
pub const EXAMPLES_DIR: &str = "tags_examples";

/// Service for creating a new workspace
pub struct InitService;

impl InitService {
    /// Initialize a workspace at `path`, optionally seeding sample tag files.
    ///
    /// Returns the sample files written, relative to the tags directory.
    pub fn execute(path: &Path, with_samples: bool) -> Result<Vec<PathBuf>> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;

        let config = Config::default();
        repo.save_config(&config)?;

        let tags_dir = repo.tags_dir(&config);
        fs::create_dir_all(&tags_dir)?;

        if !with_samples {
            return Ok(Vec::new());
        }

        let source = SampleSource::detect(&path.join(EXAMPLES_DIR));
        let written = provision(&tags_dir, &source)?;
        info!(
            "Provisioned {} sample tag file(s) into {}",
            written.len(),
            tags_dir.display()
        );
        Ok(written)
    }
}
