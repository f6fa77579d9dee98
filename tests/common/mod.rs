#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::json;

use whatslly_probe::config::ProbeConfig;
use whatslly_probe::urls::Region;

pub fn mock_config(server: &MockServer) -> ProbeConfig {
    ProbeConfig {
        url_prefix: format!("{}/api-", server.base_url()),
        domain: String::new(),
        ..ProbeConfig::default()
    }
}

pub fn ping_path(region: Region) -> String {
    format!("/api-{region}/test/ping.json")
}

pub fn missing_path(region: Region) -> String {
    format!("/api-{region}/test")
}

pub async fn mount_ping<'a>(server: &'a MockServer, region: Region) -> Mock<'a> {
    let host = format!("{}/api-{region}", server.base_url());
    server
        .mock_async(|when, then| {
            when.method(GET).path(ping_path(region));
            then.status(200)
                .json_body(json!({"success": true, "host": host}));
        })
        .await
}

pub async fn mount_missing<'a>(server: &'a MockServer, region: Region) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(GET).path(missing_path(region));
            then.status(404);
        })
        .await
}

pub async fn mount_healthy_api(server: &MockServer) -> Vec<Mock<'_>> {
    let mut mocks = Vec::new();
    for region in Region::ALL {
        mocks.push(mount_ping(server, region).await);
        mocks.push(mount_missing(server, region).await);
    }
    mocks
}
