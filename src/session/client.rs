//! Service client
//!
//! A thin, authenticated HTTP transport for one service endpoint. Issues a
//! request, checks the status, decodes the JSON body, and returns it with
//! the response headers. There is no retry, no backoff, and no rate
//! limiting: every failure surfaces immediately to the caller.

use super::{FetchedPage, Transport};
use crate::error::{Error, Result};
use crate::types::StringMap;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// OpenStack token header
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Configuration for a service client
#[derive(Debug, Clone)]
pub struct ServiceClientConfig {
    /// Base URL of the service endpoint
    pub endpoint: Option<String>,
    /// Request timeout (the engine's only cancellation mechanism)
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for ServiceClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs(30),
            default_headers: StringMap::new(),
            user_agent: format!("ostack-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ServiceClientConfig {
    /// Create a new config builder
    pub fn builder() -> ServiceClientConfigBuilder {
        ServiceClientConfigBuilder::default()
    }
}

/// Builder for service client config
#[derive(Default)]
pub struct ServiceClientConfigBuilder {
    config: ServiceClientConfig,
}

impl ServiceClientConfigBuilder {
    /// Set the service endpoint base URL
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ServiceClientConfig {
        self.config
    }
}

/// HTTP transport bound to one service endpoint and one auth token
pub struct ServiceClient {
    client: Client,
    config: ServiceClientConfig,
    token: Option<String>,
}

impl ServiceClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(ServiceClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ServiceClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            config,
            token: None,
        }
    }

    /// Set the auth token sent as `X-Auth-Token` on every request
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Consume the client, returning one with the given token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The configured endpoint base URL, if any
    pub fn endpoint(&self) -> Option<&str> {
        self.config.endpoint.as_deref()
    }

    /// Join path parts onto the endpoint base URL
    pub fn service_url(&self, parts: &[&str]) -> String {
        let base = self
            .config
            .endpoint
            .as_deref()
            .unwrap_or("")
            .trim_end_matches('/');
        let path = parts.join("/");
        format!("{base}/{path}")
    }

    /// Make a GET request, enforcing a 2xx status
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.request(Method::GET, url).await
    }

    /// Make a GET request and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.request(Method::GET, url).await?;
        let json: T = response.json().await.map_err(Error::Http)?;
        Ok(json)
    }

    async fn request(&self, method: Method, url: &str) -> Result<Response> {
        let full_url = self.build_url(url);

        let mut req = self.client.request(method.clone(), &full_url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if let Some(token) = &self.token {
            req = req.header(AUTH_TOKEN_HEADER, token.as_str());
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!(%method, url = %full_url, status = status.as_u16(), "request succeeded");
        Ok(response)
    }

    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.endpoint {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }
}

impl Default for ServiceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("config", &self.config)
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for ServiceClient {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let response = self.get(url).await?;
        let final_url: Url = response.url().clone();
        let headers = response.headers().clone();
        let body: Value = response.json().await.map_err(Error::Http)?;

        Ok(FetchedPage {
            body,
            headers,
            url: final_url,
        })
    }
}
