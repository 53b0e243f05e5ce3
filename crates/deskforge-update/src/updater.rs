//! Check-and-update cycle orchestration
//!
//! One cycle runs check → (download). A check error is terminal for the
//! cycle and never continues into a download. The caller is responsible for
//! ensuring at most one cycle is in flight per process; no internal lock is
//! taken.

use std::path::{Path, PathBuf};

use crate::config::UpdateConfig;
use crate::download::InstallerDownloader;
use crate::error::Result;
use crate::platform::BuildEnvironment;
use crate::releases::{NewVersionInfo, ReleaseFeedClient, UpdateCheck};
use crate::retention;

/// Bundles the release feed client and installer downloader for one
/// storage root and build environment
pub struct Updater {
    client: ReleaseFeedClient,
    downloader: InstallerDownloader,
    environment: BuildEnvironment,
    retention_days: u64,
    root: PathBuf,
}

impl Updater {
    /// Create an updater rooted at the product's storage directory
    pub fn new(
        config: UpdateConfig,
        environment: BuildEnvironment,
        root: impl Into<PathBuf>,
    ) -> Result<Self> {
        let downloader = InstallerDownloader::new(&config)?;
        let retention_days = config.retention.log_retention_days;
        let client = ReleaseFeedClient::new(config)?;

        Ok(Self {
            client,
            downloader,
            environment,
            retention_days,
            root: root.into(),
        })
    }

    /// The build environment this updater checks on behalf of
    pub fn environment(&self) -> &BuildEnvironment {
        &self.environment
    }

    /// The storage root under which `Updates/` and log files live
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check the release feed for a newer version
    pub async fn check(&self, include_prereleases: bool) -> Result<UpdateCheck> {
        self.client
            .check_update(&self.environment, include_prereleases)
            .await
    }

    /// Download the installer for a previously checked new version
    ///
    /// Returns the path of the downloaded installer, to be handed to the
    /// installer-invocation component.
    pub async fn download(&self, info: &NewVersionInfo) -> Result<PathBuf> {
        self.downloader.download(info, &self.root).await
    }

    /// Run both retention sweeps (pending installers, logs)
    ///
    /// Independent of the check/download path; intended for process startup.
    pub fn clean_artifacts(&self) {
        retention::clean_pending_installers(&self.root);
        retention::clean_logs(&self.root, self.environment.version, self.retention_days);
    }
}
