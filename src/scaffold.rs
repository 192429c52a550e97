use crate::error::AssetError;
use crate::registry::Registry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct DirStatus {
    pub path: PathBuf,
    pub created: bool,
}

/// Outcome of one materialization pass, in registry order.
#[derive(Debug, Default)]
pub struct ScaffoldSummary {
    pub entries: Vec<DirStatus>,
}

impl ScaffoldSummary {
    pub fn created_count(&self) -> usize {
        self.entries.iter().filter(|e| e.created).count()
    }

    pub fn existing_count(&self) -> usize {
        self.entries.len() - self.created_count()
    }
}

/// Creates every category directory the registry implies, ancestors
/// included. Never deletes anything; repeated calls change nothing.
pub fn ensure_directories(
    registry: &Registry,
    root: &Path,
) -> Result<ScaffoldSummary, AssetError> {
    let mut summary = ScaffoldSummary::default();

    for category in registry.categories() {
        let dir = category.target_dir(root);
        let created = if dir.is_dir() {
            debug!(path = %dir.display(), "directory already present");
            false
        } else {
            fs::create_dir_all(&dir).map_err(|source| AssetError::CreateDir {
                path: dir.clone(),
                source,
            })?;
            debug!(path = %dir.display(), "directory created");
            true
        };
        summary.entries.push(DirStatus { path: dir, created });
    }

    Ok(summary)
}
