//! Check command

use anyhow::Result;
use deskforge_update::{UpdateCheck, UpdateError, Updater};
use serde_json::json;
use std::path::{Path, PathBuf};

use crate::cli::CheckArgs;
use crate::output;
use crate::utils;

pub async fn run(args: CheckArgs, config: Option<&Path>, root: Option<PathBuf>) -> Result<()> {
    let config = utils::load_config(config)?;
    let root = utils::storage_root(root)?;
    let environment = utils::environment(args.per_user);
    let updater = Updater::new(config, environment, root)?;

    let spinner = output::spinner("Checking for updates...");
    let check = updater.check(args.prerelease).await;
    spinner.finish_and_clear();

    let check = match check {
        Ok(check) => check,
        Err(UpdateError::LocalBuild) => {
            output::info("Running a local build; update checks are disabled");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if args.json {
        let body = match &check {
            UpdateCheck::UpToDate => json!({ "status": "up-to-date" }),
            UpdateCheck::Available(info) => json!({
                "status": "available",
                "version": info.version.to_string(),
                "installer": info.installer_filename,
                "download-url": info.download_url,
                "release-page": info.release_page_url,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    match check {
        UpdateCheck::UpToDate => {
            output::success(&format!(
                "Already on the latest version ({})",
                updater.environment().version
            ));
        }
        UpdateCheck::Available(info) => {
            output::success(&format!("Update available: {}", info.version));
            output::kv("Installer", &info.installer_filename);
            if let Some(page) = &info.release_page_url {
                output::kv("Release page", page);
            }
            output::info("Run 'deskforge download' to fetch the installer");
        }
    }

    Ok(())
}
