//! Download command

use anyhow::Result;
use deskforge_update::{UpdateCheck, UpdateError, Updater};
use std::path::{Path, PathBuf};

use crate::cli::DownloadArgs;
use crate::output;
use crate::utils;

pub async fn run(args: DownloadArgs, config: Option<&Path>, root: Option<PathBuf>) -> Result<()> {
    let config = utils::load_config(config)?;
    let root = utils::storage_root(root)?;
    let environment = utils::environment(args.per_user);
    let updater = Updater::new(config, environment, root)?;

    let spinner = output::spinner("Checking for updates...");
    let check = updater.check(args.prerelease).await;
    spinner.finish_and_clear();

    let info = match check {
        Ok(UpdateCheck::UpToDate) => {
            output::success(&format!(
                "Already on the latest version ({})",
                updater.environment().version
            ));
            return Ok(());
        }
        Ok(UpdateCheck::Available(info)) => info,
        Err(UpdateError::LocalBuild) => {
            output::info("Running a local build; update checks are disabled");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    output::info(&format!(
        "Downloading {} ({})",
        info.installer_filename, info.version
    ));

    let spinner = output::spinner("Downloading installer...");
    let result = updater.download(&info).await;
    spinner.finish_and_clear();

    let path = result?;
    output::success("Installer downloaded");
    output::kv("Path", &path.display().to_string());

    Ok(())
}
