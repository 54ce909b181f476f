//! Extractor helpers
//!
//! Each resource package supplies a pure function `Fn(&Page) -> Result<Vec<T>>`
//! mapping a page's raw body into typed domain objects. Extractors must be
//! idempotent: the marker strategy and `all_pages` may both run them against
//! the same page. The helpers here cover the two body shapes OpenStack
//! services use for collections.

use super::page::Page;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// Deserialize the collection stored under `key` in the page body.
///
/// Covers the `{"servers": [...], "servers_links": [...]}` convention.
pub fn extract_list<T: DeserializeOwned>(page: &Page, key: &str) -> Result<Vec<T>> {
    let list = page
        .body
        .get(key)
        .ok_or_else(|| Error::decode(format!("collection key '{key}' missing from page body")))?;
    serde_json::from_value(list.clone())
        .map_err(|e| Error::decode(format!("collection '{key}' has unexpected shape: {e}")))
}

/// Deserialize a page whose body is the collection itself (a bare array)
pub fn extract_array<T: DeserializeOwned>(page: &Page) -> Result<Vec<T>> {
    if !page.body.is_array() {
        return Err(Error::decode("page body is not an array"));
    }
    serde_json::from_value(page.body.clone())
        .map_err(|e| Error::decode(format!("array body has unexpected shape: {e}")))
}
