//! Page snapshot type
//!
//! A `Page` is the immutable result of fetching one URL of a collection:
//! the decoded JSON body, the response headers, and the URL that produced
//! it. The pager hands pages to handlers and extractors by shared reference
//! only, so a page is never mutated after construction.

use crate::types::JsonValue;
use reqwest::header::HeaderMap;
use url::Url;

/// One fetched-and-decoded response representing part of a collection
#[derive(Debug, Clone)]
pub struct Page {
    /// Decoded JSON body (object or array)
    pub body: JsonValue,
    /// Response headers
    pub headers: HeaderMap,
    /// The request URL that produced this page
    pub url: Url,
}

impl Page {
    /// Create a page from a decoded response
    pub fn new(body: JsonValue, headers: HeaderMap, url: Url) -> Self {
        Self { body, headers, url }
    }

    /// Look up a body field by dot path (e.g. `"links.next"`)
    ///
    /// Returns `None` if any path segment is missing or the intermediate
    /// value is not an object.
    pub fn body_at(&self, path: &str) -> Option<&JsonValue> {
        let mut current = &self.body;
        for part in path.split('.') {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    /// Check whether the request URL carried the given query parameter
    pub fn has_query_param(&self, name: &str) -> bool {
        self.url.query_pairs().any(|(k, _)| k == name)
    }
}
