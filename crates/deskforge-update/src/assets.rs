//! Installer asset selection

use crate::config::InstallerConfig;
use crate::platform::{Architecture, InstallScope};
use crate::releases::ReleaseAsset;

/// Installer extensions in descending priority order
///
/// An `.exe` match anywhere in the asset list must win over an `.msi`
/// match appearing earlier in asset order.
const ASSET_EXTENSIONS: [&str; 2] = [".exe", ".msi"];

/// An installer asset resolved for the running platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedAsset {
    /// Asset filename, lowercased for on-disk use
    pub filename: String,

    /// Direct download URL
    pub download_url: String,
}

/// Pick the installer asset for the given architecture and install scope
///
/// For each extension in priority order, the asset list is scanned front to
/// back; the first asset whose lowercased filename ends with the extension,
/// contains the architecture token, and contains the scope's filename
/// pattern is selected. Returns `None` when no asset satisfies all three
/// predicates for any extension; there is no best-effort fallback.
pub fn select_installer_asset(
    assets: &[ReleaseAsset],
    architecture: Architecture,
    scope: InstallScope,
    installer: &InstallerConfig,
) -> Option<SelectedAsset> {
    let required_architecture = architecture.filename_token();
    let required_pattern = match scope {
        InstallScope::PerMachine => installer.machine_pattern.to_lowercase(),
        InstallScope::PerUser => installer.user_pattern.to_lowercase(),
    };

    for extension in ASSET_EXTENSIONS {
        for asset in assets {
            let filename = asset.name.to_lowercase();

            let extension_matched = filename.ends_with(extension);
            let architecture_matched = filename.contains(required_architecture);
            let pattern_matched = filename.contains(&required_pattern);
            if extension_matched && architecture_matched && pattern_matched {
                return Some(SelectedAsset {
                    filename,
                    download_url: asset.browser_download_url.clone(),
                });
            }
        }
    }

    None
}
