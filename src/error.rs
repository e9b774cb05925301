//! Error types
//!
//! Asset failures are recoverable (callers fall back to placeholders), the
//! rest abort the frame loop.

use std::path::PathBuf;

/// Failure to load a single image
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
}

/// Fatal errors surfaced by the frame loop and its collaborators
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not read settings file {}: {source}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
