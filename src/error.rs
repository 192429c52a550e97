use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by asset tree operations. Nothing recovers internally;
/// every variant bubbles up to the binary's top-level handler.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}
