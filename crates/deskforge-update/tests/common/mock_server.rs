//! Mock server helpers for feed and download testing

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serve one release object at `/releases/latest`
pub async fn mock_latest_release(server: &MockServer, release: Value) {
    Mock::given(method("GET"))
        .and(path("/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(release))
        .mount(server)
        .await;
}

/// Serve a release list at `/releases`
pub async fn mock_release_list(server: &MockServer, releases: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/releases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(releases)))
        .mount(server)
        .await;
}

/// Serve installer bytes at `/assets/{name}`
pub async fn mock_installer_download(server: &MockServer, name: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/assets/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content))
        .mount(server)
        .await;
}

/// Serve an installer that fails N times with 500 before succeeding
pub async fn mock_flaky_installer_download(
    server: &MockServer,
    name: &str,
    fail_count: u64,
    content: &[u8],
) {
    Mock::given(method("GET"))
        .and(path(format!("/assets/{name}")))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(fail_count)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/assets/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content))
        .mount(server)
        .await;
}

/// Serve an installer endpoint that always fails with 500
pub async fn mock_failing_installer_download(server: &MockServer, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/assets/{name}")))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}
