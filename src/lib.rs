pub mod error;
pub mod registry;
pub mod report;
pub mod scaffold;
pub mod scan;

pub use error::AssetError;
pub use registry::{Category, Registry};
pub use scaffold::{DirStatus, ScaffoldSummary, ensure_directories};
pub use scan::{IconStatus, ScanReport, scan};
