//! Cleanup command

use anyhow::Result;
use deskforge_update::{clean_logs, clean_pending_installers, UpdateConfig, Version};
use std::path::{Path, PathBuf};

use crate::cli::CleanupArgs;
use crate::output;
use crate::utils;

pub fn run(_args: CleanupArgs, config: Option<&Path>, root: Option<PathBuf>) -> Result<()> {
    let config: UpdateConfig = utils::load_config(config)?;
    let root = utils::storage_root(root)?;

    clean_pending_installers(&root);
    clean_logs(&root, Version::current(), config.retention.log_retention_days);

    output::success("Cleanup complete");
    output::kv("Root", &root.display().to_string());

    Ok(())
}
