use crate::error::AssetError;
use crate::registry::Registry;
use crate::scan::ScanReport;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Renders the Markdown checklist from one scan pass. Checkbox state follows
/// the report; only the generated-at line varies between otherwise identical
/// runs.
pub fn render(registry: &Registry, report: &ScanReport) -> String {
    let presence = super::existence_by_path(report);
    let mut doc = String::new();

    doc.push_str("# Icon Generation Checklist\n\n");
    doc.push_str("Use this checklist to track icon generation progress.\n\n");
    let _ = writeln!(doc, "Generated: {}\n", report.scanned_at.to_rfc3339());

    for category in registry.categories() {
        let _ = writeln!(doc, "## {}\n", category.heading());

        for &name in category.icons {
            let rel_path = category.icon_rel_path(name);
            let exists = presence.get(rel_path.as_str()).copied().unwrap_or(false);
            let (mark, glyph) = if exists { ("X", "✅") } else { (" ", "⬜") };
            let _ = writeln!(doc, "- [{}] {} {}.png", mark, glyph, name);
        }

        doc.push('\n');
    }

    doc.push_str("---\n");
    let _ = writeln!(doc, "Total: {} icons", registry.total_icons());
    doc
}

/// Writes the checklist to its fixed path, replacing any prior content.
pub fn write(
    registry: &Registry,
    report: &ScanReport,
    root: &Path,
) -> Result<PathBuf, AssetError> {
    let path = registry.checklist_path(root);
    fs::write(&path, render(registry, report)).map_err(|source| AssetError::WriteReport {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "checklist written");
    Ok(path)
}
