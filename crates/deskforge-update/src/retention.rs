//! Retention sweeps for stale installers and old log files
//!
//! Two independent, order-insensitive passes, typically run at process
//! startup. Every per-entry failure is logged and skipped; one bad entry
//! never aborts the sweep for the rest.

use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::download::pending_updates_dir;
use crate::version::Version;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Delete every installer left in the pending-updates directory
///
/// Anything with an `.msi` or `.exe` extension is stale once cleanup runs;
/// a later check re-downloads as needed. A missing directory is a no-op.
pub fn clean_pending_installers(root: &Path) {
    let dir = pending_updates_dir(root);
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "failed to read directory entry");
                continue;
            }
        };

        let path = entry.path();
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_lowercase(),
            None => continue,
        };
        if !name.ends_with(".msi") && !name.ends_with(".exe") {
            continue;
        }

        match std::fs::remove_file(&path) {
            Ok(()) => info!(path = %path.display(), "deleted stale installer"),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to delete stale installer");
            }
        }
    }
}

/// Run both log sweeps over the storage root
///
/// Top-level log files not matching the running version are deleted
/// regardless of age; logs older than the retention threshold are deleted
/// wherever they live. The rules may overlap; deletion is idempotent.
/// A log file whose name contains the running version's tag is never
/// deleted, regardless of age.
pub fn clean_logs(root: &Path, current_version: Version, retention_days: u64) {
    clean_superseded_logs(root, current_version);
    clean_aged_logs(root, current_version, retention_days);
}

/// Delete top-level logs left behind by other versions
///
/// Only the root directory is considered; a log file whose name contains
/// the running version's tag is never deleted here, regardless of age.
fn clean_superseded_logs(root: &Path, current_version: Version) {
    let tag = current_version.to_string();
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %root.display(), error = %err, "failed to read directory entry");
                continue;
            }
        };

        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        let path = entry.path();
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_lowercase(),
            None => continue,
        };
        if !name.ends_with(".log") || name.contains(&tag) {
            continue;
        }

        match std::fs::remove_file(&path) {
            Ok(()) => info!(path = %path.display(), "deleted superseded log file"),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to delete log file");
            }
        }
    }
}

/// Delete logs older than the retention threshold
///
/// Walks the root and its module subdirectories. Logs of the running
/// version are exempt. Entries that cannot be statted are skipped with a
/// warning.
fn clean_aged_logs(root: &Path, current_version: Version, retention_days: u64) {
    if !root.is_dir() {
        return;
    }

    let tag = current_version.to_string();
    let max_age = Duration::from_secs(retention_days.saturating_mul(SECS_PER_DAY));
    let now = SystemTime::now();

    // Root logs plus one level of module subdirectories.
    for entry in WalkDir::new(root).max_depth(2) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "failed to walk log directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if !name.ends_with(".log") || name.contains(&tag) {
            continue;
        }

        let modified = match entry.metadata().map_err(std::io::Error::from).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read modification time");
                continue;
            }
        };

        // A modification time in the future means the file is not old.
        let age = match now.duration_since(modified) {
            Ok(age) => age,
            Err(_) => continue,
        };
        if age <= max_age {
            continue;
        }

        match std::fs::remove_file(path) {
            Ok(()) => info!(path = %path.display(), "deleted old log file"),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to delete old log file");
            }
        }
    }
}
