//! Pagination strategy implementations
//!
//! OpenStack services return collections under three incompatible
//! conventions: a single unpaged body, a body embedding an explicit next
//! link, and a body requiring the client to compute a marker from the last
//! element seen. Each convention is one variant of [`PageStrategy`], chosen
//! once when the pager is constructed. An absent next URL is the sole
//! exhaustion signal for every variant.

use super::page::Page;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use std::fmt;
use std::sync::Arc;

/// Default body path for embedded next links
pub const DEFAULT_LINK_PATH: &str = "links.next";

/// Default query parameter name for marker cursors
pub const DEFAULT_MARKER_PARAM: &str = "marker";

/// Derives the marker of the last element on a page.
///
/// Supplied per resource: runs the resource's extractor and returns the
/// identifying key of the last element, or `None` when the page is empty.
pub type MarkerFn = Arc<dyn Fn(&Page) -> Result<Option<String>> + Send + Sync>;

/// How the pager derives the URL of the page after the current one
#[derive(Clone)]
pub enum PageStrategy {
    /// The collection fits in one response; there is never a next page
    Single,

    /// The body embeds the next URL (e.g. `{"links": {"next": ...}}` or a
    /// `*_links` array of rel/href objects)
    Linked {
        /// Dot path to the link field in the body
        link_path: String,
    },

    /// The next URL is the current one with a `marker` query parameter set
    /// to the last element's identifying key
    Marker {
        /// Query parameter name carrying the marker
        marker_param: String,
        /// Derives the marker from the current page
        last_marker: MarkerFn,
    },
}

impl PageStrategy {
    /// Strategy for unpaged collections
    pub fn single() -> Self {
        Self::Single
    }

    /// Strategy following `links.next` in the body
    pub fn linked() -> Self {
        Self::Linked {
            link_path: DEFAULT_LINK_PATH.to_string(),
        }
    }

    /// Strategy following an embedded link at a custom dot path
    pub fn linked_at(link_path: impl Into<String>) -> Self {
        Self::Linked {
            link_path: link_path.into(),
        }
    }

    /// Marker strategy with the default `marker` parameter
    pub fn marker(last_marker: MarkerFn) -> Self {
        Self::Marker {
            marker_param: DEFAULT_MARKER_PARAM.to_string(),
            last_marker,
        }
    }

    /// Marker strategy with a custom query parameter name
    pub fn marker_with_param(marker_param: impl Into<String>, last_marker: MarkerFn) -> Self {
        Self::Marker {
            marker_param: marker_param.into(),
            last_marker,
        }
    }

    /// Compute the URL of the page after `page`.
    ///
    /// `Ok(None)` means the collection is exhausted. This is the only
    /// exhaustion signal; callers must not reinterpret it.
    pub fn next_page_url(&self, page: &Page) -> Result<Option<String>> {
        match self {
            Self::Single => Ok(None),
            Self::Linked { link_path } => next_from_body(page, link_path),
            Self::Marker {
                marker_param,
                last_marker,
            } => next_from_marker(page, marker_param, last_marker),
        }
    }
}

impl fmt::Debug for PageStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.debug_struct("Single").finish(),
            Self::Linked { link_path } => f
                .debug_struct("Linked")
                .field("link_path", link_path)
                .finish(),
            Self::Marker { marker_param, .. } => f
                .debug_struct("Marker")
                .field("marker_param", marker_param)
                .finish_non_exhaustive(),
        }
    }
}

/// Resolve an embedded link field to a next URL.
///
/// A string value is returned verbatim: the service is assumed to emit a
/// fully-qualified URL and no rewriting is performed. A rel/href array
/// (compute-style `servers_links`) yields the `href` whose `rel` is
/// `"next"`. Null or a missing field means exhaustion.
fn next_from_body(page: &Page, link_path: &str) -> Result<Option<String>> {
    match page.body_at(link_path) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(url)) if url.is_empty() => Ok(None),
        Some(JsonValue::String(url)) => Ok(Some(url.clone())),
        Some(JsonValue::Array(links)) => Ok(next_from_rel_links(links)),
        Some(other) => Err(Error::decode(format!(
            "expected string, null, or rel/href array at '{link_path}', got {other}"
        ))),
    }
}

/// Pick the `href` with `rel == "next"` out of a link list
fn next_from_rel_links(links: &[JsonValue]) -> Option<String> {
    links.iter().find_map(|link| {
        let obj = link.as_object()?;
        if obj.get("rel")?.as_str()? != "next" {
            return None;
        }
        Some(obj.get("href")?.as_str()?.to_string())
    })
}

/// Build the next URL by replacing the marker query parameter.
///
/// An empty page (marker fn returns `None`) is exhaustion. When the current
/// request carried no `limit` parameter, a single fetch is treated as
/// complete even if non-empty: without a limit echo there is no signal that
/// more data exists.
fn next_from_marker(
    page: &Page,
    marker_param: &str,
    last_marker: &MarkerFn,
) -> Result<Option<String>> {
    let Some(mark) = last_marker.as_ref()(page)? else {
        return Ok(None);
    };

    if !page.has_query_param("limit") {
        return Ok(None);
    }

    let mut next = page.url.clone();
    let retained: Vec<(String, String)> = next
        .query_pairs()
        .filter(|(k, _)| k != marker_param)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    {
        let mut qp = next.query_pairs_mut();
        qp.clear();
        for (k, v) in &retained {
            qp.append_pair(k, v);
        }
        qp.append_pair(marker_param, &mark);
    }

    Ok(Some(next.to_string()))
}
