//! Authentication module
//!
//! Identity v2 token authentication and service catalog lookup.
//!
//! Pass an [`AuthOptions`] to [`authenticate`] to obtain an [`Access`]
//! (token plus catalog), or use [`authenticated_client`] to go straight to
//! a [`crate::session::ServiceClient`] for a cataloged service.

mod identity;
mod types;

pub use identity::{authenticate, authenticated_client};
pub use types::{Access, AuthOptions, CatalogEntry, Endpoint, EndpointCriteria, Interface, Token};
