/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::http::{AuthCenterError, Result};

/// Environment variable holding the API base URL
const BASE_URL_ENV: &str = "AUTH_CENTER_API_URL";

/// Fallback base URL when the environment variable is unset.
/// Matches the backend's default bind address.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the auth-center API
#[derive(Debug, Clone)]
pub struct AuthCenterClient {
    http_client: Client,
    base_url: Url,
}

impl AuthCenterClient {
    /// Create a new client with default configuration
    ///
    /// The base URL is taken from `AUTH_CENTER_API_URL`, falling back
    /// to the backend's default address when unset or empty.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = pick_base_url(std::env::var(BASE_URL_ENV).ok());
        Self::with_config_and_base_url(config, &base_url)
    }

    /// Create a new client with an explicit base URL (used by tests)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// The resolved base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build request builder for an API endpoint
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        debug!(%method, endpoint, "dispatching API request");
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and parse the JSON body regardless of HTTP status.
    ///
    /// The auth endpoints report failures inside the JSON payload, so the
    /// parsed body is handed back to the caller unchanged.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        Ok(response.json::<T>().await?)
    }

    /// Send a request, rejecting on non-2xx status before parsing.
    pub(crate) async fn send_json_checked<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(%status, "API request failed");
            return Err(AuthCenterError::api_error(status, message));
        }
        Ok(response.json::<T>().await?)
    }
}

/// Resolve the base URL from an optional environment value.
/// An empty value counts as unset.
fn pick_base_url(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
