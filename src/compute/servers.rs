//! Compute v2 server listing
//!
//! The request-builder / extractor pattern every resource package follows:
//! build the list URL, pick the strategy matching the service's pagination
//! convention, and supply an extractor mapping the raw body to typed
//! domain objects. Compute embeds its next link in a `servers_links`
//! rel/href array.

use crate::error::Result;
use crate::pagination::{extract_list, Page, Pager, PageStrategy};
use crate::session::ServiceClient;
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A (virtual) hardware instance accessible by the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Unique identifier; treat opaquely
    pub id: String,
    /// Human-readable name
    #[serde(default)]
    pub name: String,
    /// Current lifecycle status (`ACTIVE` when ready for use)
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub user_id: String,
    /// Creation timestamp as reported by the service
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    /// Small key-value store for application-specific information
    #[serde(default)]
    pub metadata: JsonObject,
}

/// Filtering and paging options for a server listing
#[derive(Debug, Clone, Default)]
pub struct ListOpts {
    /// Page size requested from the service
    pub limit: Option<u32>,
    /// Resume listing after this server ID
    pub marker: Option<String>,
    /// Filter by name
    pub name: Option<String>,
    /// Filter by status
    pub status: Option<String>,
}

impl ListOpts {
    /// Render the options as a URL query string (empty when unset)
    pub fn to_query(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(limit) = self.limit {
            serializer.append_pair("limit", &limit.to_string());
        }
        if let Some(marker) = &self.marker {
            serializer.append_pair("marker", marker);
        }
        if let Some(name) = &self.name {
            serializer.append_pair("name", name);
        }
        if let Some(status) = &self.status {
            serializer.append_pair("status", status);
        }
        serializer.finish()
    }
}

/// Create a pager over the account's servers
pub fn list(client: Arc<ServiceClient>, opts: &ListOpts) -> Pager {
    let mut url = client.service_url(&["servers"]);
    let query = opts.to_query();
    if !query.is_empty() {
        url = format!("{url}?{query}");
    }
    Pager::new(client, url, PageStrategy::linked_at("servers_links"))
}

/// Extract the servers carried by one page of a listing
pub fn extract_servers(page: &Page) -> Result<Vec<Server>> {
    extract_list(page, "servers")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqwest::header::HeaderMap;
    use serde_json::json;
    use url::Url;

    fn page_with(body: serde_json::Value) -> Page {
        Page::new(
            body,
            HeaderMap::new(),
            Url::parse("http://compute.example.com/v2/servers").unwrap(),
        )
    }

    #[test]
    fn test_extract_servers() {
        let page = page_with(json!({
            "servers": [
                {
                    "id": "52415800-8b69-11e0-9b19-734f6af67565",
                    "name": "db-server",
                    "status": "ACTIVE",
                    "tenant_id": "1234",
                    "user_id": "5678",
                    "metadata": { "Server Label": "DB 1" }
                },
                {
                    "id": "52415800-8b69-11e0-9b19-734f1f1350e5",
                    "name": "web-server",
                    "status": "BUILD"
                }
            ]
        }));

        let servers = extract_servers(&page).unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].name, "db-server");
        assert_eq!(servers[0].status, "ACTIVE");
        assert_eq!(
            servers[0].metadata.get("Server Label"),
            Some(&json!("DB 1"))
        );
        assert_eq!(servers[1].id, "52415800-8b69-11e0-9b19-734f1f1350e5");
    }

    #[test]
    fn test_extract_servers_missing_key() {
        let page = page_with(json!({ "flavors": [] }));
        let err = extract_servers(&page).unwrap_err();
        assert!(err.to_string().contains("servers"));
    }

    #[test]
    fn test_list_opts_query() {
        let opts = ListOpts {
            limit: Some(50),
            marker: Some("abc".to_string()),
            name: None,
            status: Some("ACTIVE".to_string()),
        };
        assert_eq!(opts.to_query(), "limit=50&marker=abc&status=ACTIVE");

        assert_eq!(ListOpts::default().to_query(), "");
    }
}
