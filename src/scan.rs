use crate::registry::Registry;
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::debug;

/// Existence status of one declared icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStatus {
    pub category: &'static str,
    pub size: u32,
    pub name: &'static str,
    pub rel_path: String,
    pub exists: bool,
}

/// Result of one presence-validation pass. Computed once per invocation and
/// threaded into both report emitters, so console output and generated
/// documents always agree.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub entries: Vec<IconStatus>,
    pub scanned_at: DateTime<Utc>,
}

impl ScanReport {
    pub fn existing(&self) -> impl Iterator<Item = &IconStatus> {
        self.entries.iter().filter(|e| e.exists)
    }

    pub fn missing(&self) -> impl Iterator<Item = &IconStatus> {
        self.entries.iter().filter(|e| !e.exists)
    }

    pub fn existing_count(&self) -> usize {
        self.existing().count()
    }

    pub fn missing_count(&self) -> usize {
        self.missing().count()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

/// Walks every (category, icon) pair in registry order and records whether
/// the expected file is present on disk. Read-only; an unreadable path counts
/// as missing. The observer fires once per icon as the scan proceeds.
pub fn scan(
    registry: &Registry,
    root: &Path,
    observer: Option<&dyn Fn(&IconStatus)>,
) -> ScanReport {
    let scanned_at = Utc::now();
    let mut entries = Vec::with_capacity(registry.total_icons());

    for category in registry.categories() {
        for &name in category.icons {
            let status = IconStatus {
                category: category.key,
                size: category.size,
                name,
                rel_path: category.icon_rel_path(name),
                exists: category.icon_file(root, name).is_file(),
            };
            debug!(icon = %status.rel_path, exists = status.exists, "checked icon");
            if let Some(observer) = observer {
                observer(&status);
            }
            entries.push(status);
        }
    }

    ScanReport {
        entries,
        scanned_at,
    }
}
