//! Error types for deskforge-update

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using deskforge-update's error type
pub type Result<T> = std::result::Result<T, UpdateError>;

/// Errors produced by a check-and-update cycle
///
/// Every failure is returned to the caller as a value; nothing in this crate
/// panics or terminates the hosting process.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// Update checking is disabled for local/farm builds (version 0.0.x).
    /// This is a designed no-op, not a failure.
    #[error("local build cannot be updated")]
    LocalBuild,

    /// Transport or response-parse failure while talking to the release
    /// feed. The two are intentionally not distinguished further.
    #[error("network error: {0}")]
    Network(String),

    /// The release has no installer asset matching the running architecture
    /// and install scope. Fatal for the cycle, never retried.
    #[error("release has no installer asset for this platform")]
    AssetNotFound,

    /// The pending-updates directory could not be created. Fatal, not
    /// retried.
    #[error("cannot create pending updates directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every download attempt was exhausted. A later cycle may retry.
    #[error("download failed after {attempts} attempts")]
    DownloadFailed { attempts: u32 },
}

impl From<reqwest::Error> for UpdateError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
