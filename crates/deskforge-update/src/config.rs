//! Update subsystem configuration
//!
//! Feed endpoints, retry limit, retention days, and installer filename
//! patterns are explicit configuration values so tests can point
//! components at doubles.

use serde::{Deserialize, Serialize};

/// Complete configuration for the update subsystem
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateConfig {
    /// Release feed endpoints and request settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// Installer download settings
    #[serde(default)]
    pub download: DownloadConfig,

    /// Log and installer retention settings
    #[serde(default)]
    pub retention: RetentionConfig,

    /// Installer filename patterns per install scope
    #[serde(default)]
    pub installer: InstallerConfig,
}

/// Release feed endpoints and request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeedConfig {
    /// Endpoint returning the single latest release
    #[serde(default = "default_latest_release_url")]
    pub latest_release_url: String,

    /// Endpoint returning the full release list (used for prerelease scans)
    #[serde(default = "default_all_releases_url")]
    pub all_releases_url: String,

    /// User agent string for feed requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Feed request timeout in seconds
    #[serde(default = "default_feed_timeout")]
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            latest_release_url: default_latest_release_url(),
            all_releases_url: default_all_releases_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_feed_timeout(),
        }
    }
}

/// Installer download settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DownloadConfig {
    /// Maximum number of download attempts per cycle
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Per-attempt download timeout in seconds
    #[serde(default = "default_download_timeout")]
    pub timeout_secs: u64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            timeout_secs: default_download_timeout(),
        }
    }
}

/// Log and installer retention settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RetentionConfig {
    /// Age in days beyond which a log file becomes eligible for deletion
    #[serde(default = "default_log_retention_days")]
    pub log_retention_days: u64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            log_retention_days: default_log_retention_days(),
        }
    }
}

/// Installer filename patterns per install scope
///
/// Filenames are matched case-insensitively; patterns should be lowercase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InstallerConfig {
    /// Required filename substring for per-machine installers
    #[serde(default = "default_machine_pattern")]
    pub machine_pattern: String,

    /// Required filename substring for per-user installers
    #[serde(default = "default_user_pattern")]
    pub user_pattern: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            machine_pattern: default_machine_pattern(),
            user_pattern: default_user_pattern(),
        }
    }
}

fn default_latest_release_url() -> String {
    "https://api.github.com/repos/deskforge/deskforge/releases/latest".to_string()
}

fn default_all_releases_url() -> String {
    "https://api.github.com/repos/deskforge/deskforge/releases".to_string()
}

fn default_user_agent() -> String {
    format!(
        "deskforge-update/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

fn default_feed_timeout() -> u64 {
    30
}

fn default_download_timeout() -> u64 {
    300 // 5 minutes
}

fn default_max_attempts() -> u32 {
    3
}

fn default_log_retention_days() -> u64 {
    30
}

fn default_machine_pattern() -> String {
    "deskforgesetup".to_string()
}

fn default_user_pattern() -> String {
    "deskforgeusersetup".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_release_policy() {
        let config = UpdateConfig::default();
        assert_eq!(config.download.max_attempts, 3);
        assert_eq!(config.retention.log_retention_days, 30);
        assert!(config.feed.latest_release_url.ends_with("/releases/latest"));
        assert!(config.feed.all_releases_url.ends_with("/releases"));
        assert_eq!(config.installer.machine_pattern, "deskforgesetup");
        assert_eq!(config.installer.user_pattern, "deskforgeusersetup");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: UpdateConfig = serde_json::from_str(
            r#"{"download": {"max-attempts": 5}, "retention": {"log-retention-days": 7}}"#,
        )
        .unwrap();
        assert_eq!(config.download.max_attempts, 5);
        assert_eq!(config.retention.log_retention_days, 7);
        assert_eq!(config.download.timeout_secs, 300);
        assert!(!config.feed.user_agent.is_empty());
    }
}
