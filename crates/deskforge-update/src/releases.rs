//! Release feed client
//!
//! Fetches release metadata from two fixed GET endpoints (one for the
//! single latest release, one for the full release list) and decides
//! whether a newer installer is available for the running build.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::assets::select_installer_asset;
use crate::config::UpdateConfig;
use crate::error::{Result, UpdateError};
use crate::platform::BuildEnvironment;
use crate::version::Version;

/// One release from the feed
///
/// Ephemeral: constructed fresh per fetch, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag (e.g., "v0.82.1")
    pub tag_name: String,

    /// Release page URL
    #[serde(default)]
    pub html_url: Option<String>,

    /// Whether this is a prerelease
    #[serde(default)]
    pub prerelease: bool,

    /// Release assets
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// Release asset
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset filename
    pub name: String,

    /// Download URL
    pub browser_download_url: String,
}

/// Outcome of a successful update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCheck {
    /// The running build is already the newest available
    UpToDate,

    /// A newer version with a matching installer asset is available
    Available(NewVersionInfo),
}

/// Everything a caller needs to download and present a new version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVersionInfo {
    /// The newer version
    pub version: Version,

    /// Release page URL, when the feed provided one
    pub release_page_url: Option<String>,

    /// Direct download URL of the selected installer asset
    pub download_url: String,

    /// Installer filename (lowercased) used inside the pending-updates
    /// directory
    pub installer_filename: String,
}

/// Client for the release feed
pub struct ReleaseFeedClient {
    client: reqwest::Client,
    config: UpdateConfig,
}

impl ReleaseFeedClient {
    /// Create a client from the given configuration
    pub fn new(config: UpdateConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.feed.user_agent)
            .timeout(Duration::from_secs(config.feed.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Check whether a newer version than the running build is available
    ///
    /// With `include_prereleases` the full release list is scanned and only
    /// prerelease entries are considered; otherwise the single latest
    /// release is consulted.
    ///
    /// # Errors
    ///
    /// - [`UpdateError::LocalBuild`] when the running build is the 0.0.x
    ///   sentinel; returned before any network request is issued.
    /// - [`UpdateError::Network`] for any transport or parse failure.
    /// - [`UpdateError::AssetNotFound`] when a newer release exists but has
    ///   no installer asset for the running platform.
    pub async fn check_update(
        &self,
        environment: &BuildEnvironment,
        include_prereleases: bool,
    ) -> Result<UpdateCheck> {
        if environment.version.is_local_build() {
            return Err(UpdateError::LocalBuild);
        }

        let (feed_version, release) = if include_prereleases {
            self.best_prerelease(environment.version).await?
        } else {
            self.latest_release(environment.version).await?
        };

        let Some(release) = release else {
            return Ok(UpdateCheck::UpToDate);
        };
        if feed_version <= environment.version {
            return Ok(UpdateCheck::UpToDate);
        }

        let asset = select_installer_asset(
            &release.assets,
            environment.architecture,
            environment.scope,
            &self.config.installer,
        )
        .ok_or(UpdateError::AssetNotFound)?;

        Ok(UpdateCheck::Available(NewVersionInfo {
            version: feed_version,
            release_page_url: release.html_url,
            download_url: asset.download_url,
            installer_filename: asset.filename,
        }))
    }

    /// Fetch the single latest release
    async fn latest_release(&self, current: Version) -> Result<(Version, Option<Release>)> {
        let release: Release = self.fetch_json(&self.config.feed.latest_release_url).await?;

        // An unparsable tag is treated as equal to the running version
        // ("not newer"), not as an error.
        let version = match Version::parse(&release.tag_name) {
            Some(version) => version,
            None => {
                debug!(tag = %release.tag_name, "latest release tag is unparsable");
                current
            }
        };

        Ok((version, Some(release)))
    }

    /// Scan the full release list for the newest prerelease
    ///
    /// The feed API gives no ordering guarantee, so every entry is examined;
    /// there is no early exit on first match. Non-prerelease entries,
    /// unparsable tags, and equal-or-older candidates are skipped without
    /// terminating the scan.
    async fn best_prerelease(&self, current: Version) -> Result<(Version, Option<Release>)> {
        let releases: Vec<Release> = self.fetch_json(&self.config.feed.all_releases_url).await?;

        let mut best = current;
        let mut chosen = None;
        for release in releases {
            if !release.prerelease {
                continue;
            }
            let Some(version) = Version::parse(&release.tag_name) else {
                debug!(tag = %release.tag_name, "skipping prerelease with unparsable tag");
                continue;
            };
            if version <= best {
                continue;
            }
            best = version;
            chosen = Some(release);
        }

        Ok((best, chosen))
    }

    /// GET a feed endpoint and deserialize its JSON body
    ///
    /// Transport and parse failures collapse into a single
    /// [`UpdateError::Network`]; the distinction is not surfaced further.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "fetching release feed");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::Network(format!("{url}: status {status}")));
        }

        Ok(response.json::<T>().await?)
    }
}
