pub mod checklist;
pub mod manifest;

use crate::scan::ScanReport;
use std::collections::HashMap;

/// Existence flags keyed by report-facing path, for emitters that walk the
/// registry rather than the report entries.
pub(crate) fn existence_by_path(report: &ScanReport) -> HashMap<&str, bool> {
    report
        .entries
        .iter()
        .map(|e| (e.rel_path.as_str(), e.exists))
        .collect()
}
