//! Common test infrastructure for deskforge-update tests
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `builders`: fluent builders for release feed JSON bodies
//! - `mock_server`: wiremock setup helpers for feed and download endpoints

// Allow unused code in test infrastructure - not every test file uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod builders;
pub mod mock_server;

pub use builders::*;
pub use mock_server::*;

use deskforge_update::{Architecture, BuildEnvironment, InstallScope, UpdateConfig, Version};

/// Machine-scope installer filename pattern used across tests
pub const MACHINE_PATTERN: &str = "deskforgesetup";

/// User-scope installer filename pattern used across tests
pub const USER_PATTERN: &str = "deskforgeusersetup";

/// A build environment for an x64 per-machine install at the given version
pub fn environment(major: u64, minor: u64, patch: u64) -> BuildEnvironment {
    BuildEnvironment {
        version: Version::new(major, minor, patch),
        architecture: Architecture::X64,
        scope: InstallScope::PerMachine,
    }
}

/// Config pointing both feed endpoints at a wiremock server
pub fn config_for_server(server_uri: &str) -> UpdateConfig {
    let mut config = UpdateConfig::default();
    config.feed.latest_release_url = format!("{server_uri}/releases/latest");
    config.feed.all_releases_url = format!("{server_uri}/releases");
    config
}
