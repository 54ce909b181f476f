//! # ostack-sdk
//!
//! A Rust SDK for OpenStack-compatible cloud APIs.
//!
//! The heart of the crate is the pagination engine: OpenStack services
//! return collections under incompatible conventions (single unpaged
//! bodies, embedded `next` links, marker-derived cursors), and the engine
//! presents one lazy iteration contract over all of them. Resource
//! packages plug in their own JSON shapes and element types.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ostack_sdk::auth::{authenticated_client, AuthOptions, EndpointCriteria};
//! use ostack_sdk::compute::servers;
//! use ostack_sdk::Result;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let opts = AuthOptions::from_env()?;
//!     let criteria = EndpointCriteria::service("compute").in_region("RegionOne");
//!     let client = Arc::new(authenticated_client(&opts, &criteria).await?);
//!
//!     // Materialize every page of the listing...
//!     let mut pager = servers::list(client.clone(), &servers::ListOpts::default());
//!     let all = pager.all_pages(servers::extract_servers).await?;
//!
//!     // ...or stream pages lazily with early stop.
//!     let mut pager = servers::list(client, &servers::ListOpts::default());
//!     pager
//!         .each_page(|page| {
//!             let servers = servers::extract_servers(page)?;
//!             Ok(servers.iter().all(|s| s.status == "ACTIVE"))
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Resource packages                        │
//! │   build list URL · pick strategy · extract typed elements   │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────────┬───────────────┐
//! │     Auth     │          Pagination          │    Session    │
//! ├──────────────┼──────────────────────────────┼───────────────┤
//! │ Identity v2  │ Pager (each_page/all_pages)  │ ServiceClient │
//! │ Catalog      │ Single / Linked / Marker     │ Transport     │
//! └──────────────┴──────────────────────────────┴───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Identity authentication and catalog lookup
pub mod auth;

/// Service client and transport seam
pub mod session;

/// Pagination engine
pub mod pagination;

/// Compute resource packages
pub mod compute;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pagination::{Page, Pager, PageStrategy};
pub use session::{FetchedPage, ServiceClient, ServiceClientConfig, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
