use serde::Serialize;

use crate::config::Config;
use crate::error::ApiError;

/// Client for the Lost Pixel platform API.
///
/// One client per process is enough; it only knows how to POST a JSON body
/// to a logical route under the configured platform URL.
pub struct ApiClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client from process configuration.
    pub fn new(config: &Config) -> Self {
        // Create client with 60 second timeout: result ingestion can take
        // a while for builds with many comparisons.
        // Include version in User-Agent header for tracking
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("LostPixel/{}", version);

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .user_agent(&user_agent)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: config
                .lost_pixel_platform_url
                .trim_end_matches('/')
                .to_string(),
            api_key: config.api_key.clone(),
            client,
        }
    }

    /// URL for a logical API route.
    fn route_url(&self, route: &str) -> String {
        format!("{}/api/{}", self.base_url, route)
    }

    /// POST a JSON body to a logical route and return the raw response body.
    ///
    /// No retries: transport errors and non-success statuses are propagated
    /// to the caller as-is.
    pub async fn send<T: Serialize>(
        &self,
        route: &str,
        body: &T,
    ) -> Result<serde_json::Value, ApiError> {
        let mut request = self.client.post(self.route_url(route)).json(body);

        if let Some(ref api_key) = self.api_key {
            request = request.header("x-api-key", api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}
