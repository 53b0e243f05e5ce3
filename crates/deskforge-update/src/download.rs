//! Installer download into the pending-updates directory
//!
//! Each attempt is an independent, non-resumable full download; attempts
//! run strictly sequentially and the first success short-circuits the rest.
//! Dropping the returned future abandons the in-flight transfer and all
//! remaining attempts.

use futures_util::StreamExt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::UpdateConfig;
use crate::error::{Result, UpdateError};
use crate::releases::NewVersionInfo;

/// Directory under the storage root holding pending installer downloads
pub fn pending_updates_dir(root: &Path) -> PathBuf {
    root.join("Updates")
}

/// Failure of a single download attempt; retried up to the configured limit
#[derive(Debug, Error)]
enum AttemptError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("http status {0}")]
    Status(reqwest::StatusCode),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads installer assets with bounded retry
pub struct InstallerDownloader {
    client: reqwest::Client,
    max_attempts: u32,
}

impl InstallerDownloader {
    /// Create a downloader from the given configuration
    pub fn new(config: &UpdateConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.feed.user_agent)
            .timeout(Duration::from_secs(config.download.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            // A cycle always makes at least one attempt.
            max_attempts: config.download.max_attempts.max(1),
        })
    }

    /// Download the installer for a new version under `<root>/Updates`
    ///
    /// Creates the pending-updates directory first; failure there is fatal
    /// and not retried. On success returns the final installer path. After
    /// exhausting all attempts the destination may hold a partial file;
    /// callers must not assume the path is clean.
    ///
    /// # Errors
    ///
    /// [`UpdateError::Directory`] if the pending-updates directory cannot be
    /// created, [`UpdateError::DownloadFailed`] when every attempt fails.
    pub async fn download(&self, info: &NewVersionInfo, root: &Path) -> Result<PathBuf> {
        let dir = pending_updates_dir(root);
        std::fs::create_dir_all(&dir).map_err(|source| UpdateError::Directory {
            path: dir.clone(),
            source,
        })?;

        let destination = dir.join(&info.installer_filename);

        let mut attempts = 0;
        while attempts < self.max_attempts {
            attempts += 1;
            match self.fetch_to_file(&info.download_url, &destination).await {
                Ok(()) => {
                    info!(
                        version = %info.version,
                        path = %destination.display(),
                        "installer downloaded"
                    );
                    return Ok(destination);
                }
                Err(err) => {
                    warn!(
                        attempt = attempts,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "installer download attempt failed"
                    );
                }
            }
        }

        Err(UpdateError::DownloadFailed { attempts })
    }

    /// One full download attempt; truncates any previous partial file
    async fn fetch_to_file(
        &self,
        url: &str,
        destination: &Path,
    ) -> std::result::Result<(), AttemptError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::Status(status));
        }

        let mut file = std::fs::File::create(destination)?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)?;
        }
        file.flush()?;

        Ok(())
    }
}
