//! Sample tag files for new workspaces

use crate::error::Result;
use crate::infrastructure::repository::collect_tag_files;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

// Built-in sample tag files
const COLORS_SAMPLE: &str = "\
warm:
  - red
  - orange
  - yellow
cool:
  - blue
  - green
  - purple
";
const OUTFITS_SAMPLE: &str = "\
casual:
  tops:
    - t-shirt
    - hoodie
    - denim jacket
  bottoms:
    - jeans
    - shorts
formal:
  - suit
  - evening dress
colorful: \"@colors:warm@ shirt\"
";
const PROPS_SAMPLE: &str = "\
weapons:
  - sword
  - bow
  - staff
held: \"holding @props:weapons@\"
";

const BUILTIN_SAMPLES: [(&str, &str); 3] = [
    ("colors.yml", COLORS_SAMPLE),
    ("outfits.yml", OUTFITS_SAMPLE),
    ("props.yml", PROPS_SAMPLE),
];

/// Where provisioned tag files come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleSource {
    /// Copy every tag file found under this directory
    Directory(PathBuf),
    /// Write the samples bundled with the binary
    Builtin,
}

impl SampleSource {
    /// `examples_dir` if it holds tag files, otherwise the bundled samples
    pub fn detect(examples_dir: &Path) -> Self {
        if collect_tag_files(examples_dir).is_empty() {
            SampleSource::Builtin
        } else {
            SampleSource::Directory(examples_dir.to_path_buf())
        }
    }
}

/// Populate `tags_dir` from `source` when it has no tag files yet.
///
/// Returns the files written, relative to `tags_dir`. Existing tag files
/// mean nothing is touched.
pub fn provision(tags_dir: &Path, source: &SampleSource) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(tags_dir)?;

    if !collect_tag_files(tags_dir).is_empty() {
        debug!("{} already has tag files", tags_dir.display());
        return Ok(Vec::new());
    }

    let mut written = Vec::new();
    match source {
        SampleSource::Directory(examples_dir) => {
            for rel in collect_tag_files(examples_dir) {
                let target = tags_dir.join(&rel);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(examples_dir.join(&rel), &target)?;
                debug!("Copied sample {}", target.display());
                written.push(rel);
            }
        }
        SampleSource::Builtin => {
            for (name, content) in BUILTIN_SAMPLES {
                fs::write(tags_dir.join(name), content)?;
                debug!("Wrote sample {}", name);
                written.push(PathBuf::from(name));
            }
        }
    }

    Ok(written)
}
