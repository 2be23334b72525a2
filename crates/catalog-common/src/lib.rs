//! Shared data model, normalization, link resolution, and filtering for the
//! Hinch catalog browser.
//!
//! Everything here is pure and synchronous: raw JSON text goes in, canonical
//! [`types::CatalogItem`] lists come out, and the facet/filter functions
//! re-derive their results from scratch on every call. Browser concerns
//! (fetching, signals, rendering) live in the `ui` crate.

pub mod drive;
pub mod facets;
pub mod filter;
pub mod paging;
pub mod record;
pub mod types;
