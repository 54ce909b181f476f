//! Identity v2 authentication
//!
//! Issues the token request, resolves service endpoints from the catalog,
//! and builds authenticated service clients. Everything here is explicit
//! dependency injection: there is no process-wide provider registry.

use super::types::{Access, AuthOptions, EndpointCriteria, Interface};
use crate::error::{Error, Result};
use crate::session::{ServiceClient, ServiceClientConfig};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

#[derive(Deserialize)]
struct AccessWrapper {
    access: Access,
}

impl AuthOptions {
    /// Read options from the standard `OS_*` environment variables.
    ///
    /// Requires `OS_AUTH_URL`, `OS_USERNAME`, and `OS_PASSWORD`;
    /// `OS_TENANT_ID` and `OS_TENANT_NAME` are optional.
    pub fn from_env() -> Result<Self> {
        let require = |var: &str| {
            std::env::var(var).map_err(|_| Error::missing_auth_field(var.to_string()))
        };

        Ok(Self {
            identity_endpoint: require("OS_AUTH_URL")?,
            username: require("OS_USERNAME")?,
            password: require("OS_PASSWORD")?,
            tenant_id: std::env::var("OS_TENANT_ID").ok(),
            tenant_name: std::env::var("OS_TENANT_NAME").ok(),
            token_id: None,
        })
    }

    /// Build the Identity v2 token request body
    pub(crate) fn token_request_body(&self) -> Result<serde_json::Value> {
        if self.identity_endpoint.is_empty() {
            return Err(Error::missing_auth_field("identity_endpoint"));
        }

        let mut auth = if let Some(token_id) = &self.token_id {
            json!({ "token": { "id": token_id } })
        } else {
            if self.username.is_empty() {
                return Err(Error::missing_auth_field("username"));
            }
            if self.password.is_empty() {
                return Err(Error::missing_auth_field("password"));
            }
            json!({
                "passwordCredentials": {
                    "username": self.username,
                    "password": self.password,
                }
            })
        };

        if let Some(tenant_id) = &self.tenant_id {
            auth["tenantId"] = json!(tenant_id);
        }
        if let Some(tenant_name) = &self.tenant_name {
            auth["tenantName"] = json!(tenant_name);
        }

        Ok(json!({ "auth": auth }))
    }
}

/// Authenticate against the identity service and return the issued token
/// plus service catalog.
pub async fn authenticate(opts: &AuthOptions) -> Result<Access> {
    let body = opts.token_request_body()?;
    let url = format!("{}/tokens", opts.identity_endpoint.trim_end_matches('/'));

    debug!(url = %url, "requesting identity token");
    let client = reqwest::Client::new();
    let response = client.post(&url).json(&body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(Error::auth(format!(
            "identity service returned {}: {detail}",
            status.as_u16()
        )));
    }

    let wrapper: AccessWrapper = response.json().await.map_err(Error::Http)?;
    Ok(wrapper.access)
}

impl Access {
    /// Locate the first catalog endpoint fulfilling `criteria`
    pub fn endpoint_for(&self, criteria: &EndpointCriteria) -> Result<String> {
        let not_found = || {
            Error::endpoint_not_found(
                criteria.service_type.clone(),
                criteria.region.clone().unwrap_or_else(|| "any".to_string()),
            )
        };

        let entry = self
            .service_catalog
            .iter()
            .find(|e| e.service_type == criteria.service_type)
            .ok_or_else(not_found)?;

        let endpoint = entry
            .endpoints
            .iter()
            .find(|ep| match &criteria.region {
                Some(region) => &ep.region == region,
                None => true,
            })
            .ok_or_else(not_found)?;

        match criteria.interface {
            Interface::Public => Ok(endpoint.public_url.clone()),
            Interface::Internal => endpoint.internal_url.clone().ok_or_else(not_found),
        }
    }
}

/// Authenticate and build a [`ServiceClient`] bound to the endpoint
/// matching `criteria`, with the issued token applied.
pub async fn authenticated_client(
    opts: &AuthOptions,
    criteria: &EndpointCriteria,
) -> Result<ServiceClient> {
    let access = authenticate(opts).await?;
    let endpoint = access.endpoint_for(criteria)?;

    let config = ServiceClientConfig::builder().endpoint(endpoint).build();
    Ok(ServiceClient::with_config(config).with_token(access.token.id))
}
