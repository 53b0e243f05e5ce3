//! Installer download tests
//!
//! Covers the pending-updates directory lifecycle, bounded sequential
//! retry, and the short-circuit on first success.

mod common;

use common::*;
use deskforge_update::{
    pending_updates_dir, InstallerDownloader, NewVersionInfo, UpdateConfig, UpdateError, Version,
};
use wiremock::MockServer;

const INSTALLER_NAME: &str = "deskforgesetup-x64.exe";
const INSTALLER_BYTES: &[u8] = b"MZ fake installer payload";

fn info_for(server: &MockServer) -> NewVersionInfo {
    NewVersionInfo {
        version: Version::new(0, 83, 0),
        release_page_url: None,
        download_url: format!("{}/assets/{INSTALLER_NAME}", server.uri()),
        installer_filename: INSTALLER_NAME.to_string(),
    }
}

fn downloader(max_attempts: u32) -> InstallerDownloader {
    let mut config = UpdateConfig::default();
    config.download.max_attempts = max_attempts;
    InstallerDownloader::new(&config).unwrap()
}

#[tokio::test]
async fn downloads_installer_into_pending_updates_dir() {
    let server = MockServer::start().await;
    mock_installer_download(&server, INSTALLER_NAME, INSTALLER_BYTES).await;

    let root = tempfile::tempdir().unwrap();
    let path = downloader(3)
        .download(&info_for(&server), root.path())
        .await
        .unwrap();

    assert_eq!(path, pending_updates_dir(root.path()).join(INSTALLER_NAME));
    assert_eq!(std::fs::read(&path).unwrap(), INSTALLER_BYTES);
}

#[tokio::test]
async fn creates_pending_updates_dir_recursively() {
    let server = MockServer::start().await;
    mock_installer_download(&server, INSTALLER_NAME, INSTALLER_BYTES).await;

    let base = tempfile::tempdir().unwrap();
    let root = base.path().join("nested").join("storage");

    let path = downloader(3)
        .download(&info_for(&server), &root)
        .await
        .unwrap();

    assert!(pending_updates_dir(&root).is_dir());
    assert!(path.exists());
}

#[tokio::test]
async fn succeeds_on_final_attempt() {
    let server = MockServer::start().await;
    // Attempts 1 and 2 fail; attempt 3 (the configured maximum) succeeds.
    mock_flaky_installer_download(&server, INSTALLER_NAME, 2, INSTALLER_BYTES).await;

    let root = tempfile::tempdir().unwrap();
    let path = downloader(3)
        .download(&info_for(&server), root.path())
        .await
        .unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), INSTALLER_BYTES);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn reports_failure_after_exhausting_attempts() {
    let server = MockServer::start().await;
    mock_failing_installer_download(&server, INSTALLER_NAME).await;

    let root = tempfile::tempdir().unwrap();
    let result = downloader(3)
        .download(&info_for(&server), root.path())
        .await;

    assert!(matches!(
        result,
        Err(UpdateError::DownloadFailed { attempts: 3 })
    ));
    // Exactly the configured number of attempts, no unbounded looping.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn first_success_short_circuits_remaining_attempts() {
    let server = MockServer::start().await;
    mock_installer_download(&server, INSTALLER_NAME, INSTALLER_BYTES).await;

    let root = tempfile::tempdir().unwrap();
    downloader(3)
        .download(&info_for(&server), root.path())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn directory_failure_is_fatal_and_not_retried() {
    let server = MockServer::start().await;
    mock_installer_download(&server, INSTALLER_NAME, INSTALLER_BYTES).await;

    // A regular file where the storage root should be makes create_dir_all fail.
    let base = tempfile::tempdir().unwrap();
    let blocker = base.path().join("root");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let result = downloader(3).download(&info_for(&server), &blocker).await;

    assert!(matches!(result, Err(UpdateError::Directory { .. })));
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "no download attempt before the directory exists");
}
