//! Service client and transport seam
//!
//! The pagination engine consumes exactly one capability from its
//! environment: [`Transport::fetch`], which resolves a URL to a decoded
//! JSON body plus response headers. [`ServiceClient`] is the concrete
//! reqwest-backed implementation, carrying the endpoint base URL and the
//! auth token. How authentication or retries happen upstream is opaque to
//! the engine.

mod client;

pub use client::{ServiceClient, ServiceClientConfig, ServiceClientConfigBuilder, AUTH_TOKEN_HEADER};

use crate::error::Result;
use crate::types::JsonValue;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use url::Url;

/// One successfully fetched and decoded response
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Decoded JSON body
    pub body: JsonValue,
    /// Response headers
    pub headers: HeaderMap,
    /// The URL the response came from
    pub url: Url,
}

/// The single capability the pagination engine needs from its environment
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and decode the JSON body.
    ///
    /// Blocks (asynchronously) until the response arrives or the transport's
    /// own deadline fires; the engine adds no timeout of its own.
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

#[cfg(test)]
mod tests;
