//! Self-update subsystem for the Deskforge desktop utilities suite
//!
//! Provides:
//! - Version checking against the GitHub release feed (latest release or a
//!   full prerelease scan)
//! - Installer asset selection for the running architecture and install scope
//! - Installer download into the pending-updates directory with bounded retry
//! - Retention sweeps for stale installers and aged or superseded log files
//!
//! Installer execution and trust verification of downloaded binaries are
//! handled by separate components and are out of scope here.

pub mod assets;
pub mod config;
pub mod download;
pub mod error;
pub mod platform;
pub mod releases;
pub mod retention;
pub mod updater;
pub mod version;

pub use assets::{select_installer_asset, SelectedAsset};
pub use config::UpdateConfig;
pub use download::{pending_updates_dir, InstallerDownloader};
pub use error::{Result, UpdateError};
pub use platform::{Architecture, BuildEnvironment, InstallScope};
pub use releases::{NewVersionInfo, Release, ReleaseAsset, ReleaseFeedClient, UpdateCheck};
pub use retention::{clean_logs, clean_pending_installers};
pub use updater::Updater;
pub use version::Version;
