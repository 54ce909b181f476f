//! Pagination engine
//!
//! Supports: Single, Linked (embedded next URL), Marker (computed cursor)
//!
//! # Overview
//!
//! Every OpenStack collection, whatever convention its service uses, is
//! traversed through the same lazy contract: construct a [`Pager`] with the
//! initial URL and a [`PageStrategy`], then drive it with
//! [`Pager::each_page`] (callback per page, early stop) or
//! [`Pager::all_pages`] (full materialization through the resource's
//! extractor). The pager issues one blocking fetch at a time and holds at
//! most one [`Page`].

mod extract;
mod page;
mod pager;
mod strategy;

pub use extract::{extract_array, extract_list};
pub use page::Page;
pub use pager::Pager;
pub use strategy::{MarkerFn, PageStrategy, DEFAULT_LINK_PATH, DEFAULT_MARKER_PARAM};
