use crate::error::AssetError;
use crate::registry::Registry;
use crate::scan::ScanReport;
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const MANIFEST_VERSION: &str = "1.0.0";

/// Machine-readable projection of one scan pass. Categories and icons
/// serialize in registry order.
#[derive(Debug, Serialize)]
pub struct IconManifest {
    pub generated: String,
    pub version: &'static str,
    pub categories: IndexMap<&'static str, CategoryManifest>,
}

#[derive(Debug, Serialize)]
pub struct CategoryManifest {
    pub path: &'static str,
    pub size: u32,
    pub icons: Vec<IconEntry>,
}

#[derive(Debug, Serialize)]
pub struct IconEntry {
    pub name: &'static str,
    pub path: String,
    pub exists: bool,
}

/// Builds the manifest from the threaded scan result. Each icon's exists
/// flag is resolved from that icon's own report entry inside the mapping
/// step, never from a neighbouring iteration.
pub fn build(registry: &Registry, report: &ScanReport) -> IconManifest {
    let presence = super::existence_by_path(report);
    let mut categories = IndexMap::with_capacity(registry.categories().len());

    for category in registry.categories() {
        let icons = category
            .icons
            .iter()
            .map(|&name| {
                let path = category.icon_rel_path(name);
                let exists = presence.get(path.as_str()).copied().unwrap_or(false);
                IconEntry { name, path, exists }
            })
            .collect();

        categories.insert(
            category.key,
            CategoryManifest {
                path: category.dir,
                size: category.size,
                icons,
            },
        );
    }

    IconManifest {
        generated: report.scanned_at.to_rfc3339(),
        version: MANIFEST_VERSION,
        categories,
    }
}

/// Serializes the manifest to its fixed path, replacing any prior content.
/// The parent directory is created if the tree has not been scaffolded yet.
pub fn write(
    registry: &Registry,
    report: &ScanReport,
    root: &Path,
) -> Result<PathBuf, AssetError> {
    let path = registry.manifest_path(root);
    let json = serde_json::to_string_pretty(&build(registry, report))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| AssetError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&path, json).map_err(|source| AssetError::WriteReport {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "manifest written");
    Ok(path)
}
