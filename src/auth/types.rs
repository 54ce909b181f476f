//! Authentication types
//!
//! Credential options plus the Identity v2 token/catalog wire shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials and endpoint needed to authenticate against an
/// OpenStack-compatible identity service.
///
/// Populate one manually or via [`AuthOptions::from_env`].
#[derive(Debug, Clone, Default)]
pub struct AuthOptions {
    /// HTTP endpoint of the identity service (e.g. `https://identity.example.com/v2.0`)
    pub identity_endpoint: String,
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
    /// Optional tenant ID to scope the token to
    pub tenant_id: Option<String>,
    /// Optional tenant name to scope the token to
    pub tenant_name: Option<String>,
    /// Authenticate with an existing token instead of credentials
    pub token_id: Option<String>,
}

/// Which catalog URL to select for an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interface {
    /// Publicly routable endpoint URL
    #[default]
    Public,
    /// Endpoint URL on the provider's internal network
    Internal,
}

/// Criteria for locating a service endpoint in the catalog.
///
/// Fields left at their zero values do not participate in the search.
#[derive(Debug, Clone, Default)]
pub struct EndpointCriteria {
    /// Service catalog entry type (e.g. `compute`, `volume`)
    pub service_type: String,
    /// Endpoint region; `None` accepts the first region listed
    pub region: Option<String>,
    /// Public or internal URL
    pub interface: Interface,
}

impl EndpointCriteria {
    /// Criteria matching the first endpoint of a service type
    pub fn service(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            ..Self::default()
        }
    }

    /// Restrict the search to a region
    #[must_use]
    pub fn in_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Select the internal endpoint URL
    #[must_use]
    pub fn internal(mut self) -> Self {
        self.interface = Interface::Internal;
        self
    }
}

/// A scoped token issued by the identity service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Opaque token ID, sent as `X-Auth-Token` on service requests
    pub id: String,
    /// Expiration timestamp, if the service reports one
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
}

impl Token {
    /// Check whether the token's reported expiry has passed
    pub fn is_expired(&self) -> bool {
        match self.expires {
            Some(expires) => Utc::now() >= expires,
            None => false,
        }
    }
}

/// One endpoint of a catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Region this endpoint serves
    #[serde(default)]
    pub region: String,
    /// Publicly routable URL
    #[serde(rename = "publicURL")]
    pub public_url: String,
    /// URL on the provider's internal network
    #[serde(rename = "internalURL", default)]
    pub internal_url: Option<String>,
}

/// One service in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Service name (e.g. `nova`)
    #[serde(default)]
    pub name: String,
    /// Service type (e.g. `compute`)
    #[serde(rename = "type")]
    pub service_type: String,
    /// Endpoints offering this service
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// The identity service's answer to a successful token request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Access {
    /// The issued token
    pub token: Token,
    /// Catalog of services available to the token
    #[serde(rename = "serviceCatalog", default)]
    pub service_catalog: Vec<CatalogEntry>,
}
