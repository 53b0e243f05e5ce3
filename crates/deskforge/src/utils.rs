//! Shared command helpers: config loading and storage root resolution

use anyhow::{anyhow, Context, Result};
use deskforge_update::{BuildEnvironment, InstallScope, UpdateConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load the update configuration, falling back to built-in defaults
///
/// Missing fields in the file are filled from the defaults.
pub fn load_config(path: Option<&Path>) -> Result<UpdateConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading update config");
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid config file {}", path.display()))
        }
        None => {
            debug!("no config file given, using defaults");
            Ok(UpdateConfig::default())
        }
    }
}

/// Resolve the storage root for installers and logs
///
/// An explicit `--root` wins; otherwise the platform data directory is used.
pub fn storage_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root);
    }

    let dirs = directories::ProjectDirs::from("com", "Deskforge", "Deskforge")
        .ok_or_else(|| anyhow!("could not determine the platform data directory"))?;
    let root = dirs.data_local_dir().to_path_buf();
    debug!(root = %root.display(), "resolved default storage root");
    Ok(root)
}

/// The build environment for the running binary and the requested scope
pub fn environment(per_user: bool) -> BuildEnvironment {
    let scope = if per_user {
        InstallScope::PerUser
    } else {
        InstallScope::PerMachine
    };
    BuildEnvironment::current(scope)
}
