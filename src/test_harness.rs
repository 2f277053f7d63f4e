//! Integration test harness for mock backends
//!
//! This module provides utilities for running integration tests against mock servers
//! instead of requiring real infrastructure to be running. One mockito server
//! stands in for both the results API and the object-storage endpoint.

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

use crate::config::{Config, S3Config};

/// A test harness that sets up a mock server for integration testing
pub struct TestHarness {
    pub server: ServerGuard,
}

impl TestHarness {
    /// Create a new test harness with a mock server
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        Self { server }
    }

    /// Get the mock server URL
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Configuration pointing every outbound call at the mock server.
    pub fn config(&self) -> Config {
        let (host, port) = self.host_and_port();

        Config {
            lost_pixel_project_id: "proj-123".to_string(),
            lost_pixel_platform_url: self.url(),
            api_key: Some("test-api-key".to_string()),
            ci_build_id: "build-1".to_string(),
            ci_build_number: "42".to_string(),
            repository: "acme/widgets".to_string(),
            commit_ref: "refs/heads/main".to_string(),
            commit_ref_name: "main".to_string(),
            commit_hash: "deadbeef".to_string(),
            s3: S3Config {
                end_point: host,
                region: None,
                access_key: "test-access".to_string(),
                secret_key: "test-secret".to_string(),
                session_token: None,
                port: Some(port),
                ssl: false,
                bucket_name: "test-bucket".to_string(),
            },
        }
    }

    fn host_and_port(&self) -> (String, u16) {
        let host_with_port = self.server.host_with_port();
        let (host, port) = host_with_port
            .split_once(':')
            .expect("mock server address has host:port form");
        (host.to_string(), port.parse().expect("numeric port"))
    }

    /// Mock the /api/result POST endpoint for success
    pub fn mock_result_success(&mut self) -> Mock {
        self.server
            .mock("POST", "/api/result")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": true }).to_string())
            .create()
    }

    /// Mock the /api/result POST endpoint for failure
    pub fn mock_result_failure(&mut self, status: usize) -> Mock {
        self.server
            .mock("POST", "/api/result")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "ingestion failed" }).to_string())
            .create()
    }

    /// Mock a path-style PutObject against the test bucket
    pub fn mock_put_object(&mut self, key: &str, etag: &str) -> Mock {
        self.server
            .mock("PUT", format!("/test-bucket/{}", key).as_str())
            .match_query(Matcher::Any)
            .match_header("x-amz-meta-kind", "difference")
            .with_status(200)
            .with_header("ETag", etag)
            .create()
    }

    /// Mock a path-style PutObject rejection (auth, missing bucket, ...)
    pub fn mock_put_object_failure(&mut self, key: &str, status: usize) -> Mock {
        self.server
            .mock("PUT", format!("/test-bucket/{}", key).as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/xml")
            .with_body(
                r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>"#,
            )
            .create()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_harness_config_points_at_mock_server() {
        let harness = TestHarness::new().await;
        let config = harness.config();

        assert_eq!(config.lost_pixel_platform_url, harness.url());
        assert_eq!(config.s3.endpoint_url(), harness.url());
        assert!(!config.s3.ssl);
    }

    #[tokio::test]
    async fn test_mock_result_success_responds() {
        let mut harness = TestHarness::new().await;
        let mock = harness.mock_result_success();

        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/api/result", harness.url()))
            .json(&json!({ "success": true }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        mock.assert_async().await;
    }
}
