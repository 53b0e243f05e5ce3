//! Builder for release feed JSON bodies
//!
//! Tests feed releases to the client through wiremock, so the builder
//! produces `serde_json::Value` bodies in the feed's wire format rather
//! than library types.

use serde_json::{json, Value};

/// Builder for one release object in the feed's wire format
#[derive(Debug, Clone)]
pub struct ReleaseBuilder {
    tag_name: String,
    html_url: Option<String>,
    prerelease: bool,
    assets: Vec<Value>,
}

impl ReleaseBuilder {
    /// Create a builder with minimal defaults
    pub fn new(tag: &str) -> Self {
        Self {
            tag_name: tag.to_string(),
            html_url: None,
            prerelease: false,
            assets: Vec::new(),
        }
    }

    /// Set the release page URL
    pub fn html_url(mut self, url: &str) -> Self {
        self.html_url = Some(url.to_string());
        self
    }

    /// Mark as prerelease
    pub fn prerelease(mut self) -> Self {
        self.prerelease = true;
        self
    }

    /// Add an asset with the given filename and download URL
    pub fn asset(mut self, name: &str, download_url: &str) -> Self {
        self.assets.push(json!({
            "name": name,
            "browser_download_url": download_url,
        }));
        self
    }

    /// Add the standard machine-scope installer pair for x64 and arm64
    pub fn with_standard_installers(self, server_uri: &str) -> Self {
        self.asset(
            "DeskforgeSetup-x64.exe",
            &format!("{server_uri}/assets/DeskforgeSetup-x64.exe"),
        )
        .asset(
            "DeskforgeSetup-x64.msi",
            &format!("{server_uri}/assets/DeskforgeSetup-x64.msi"),
        )
        .asset(
            "DeskforgeSetup-arm64.exe",
            &format!("{server_uri}/assets/DeskforgeSetup-arm64.exe"),
        )
    }

    /// Build the wire-format JSON object
    pub fn build(self) -> Value {
        json!({
            "tag_name": self.tag_name,
            "html_url": self.html_url,
            "prerelease": self.prerelease,
            "assets": self.assets,
        })
    }
}
