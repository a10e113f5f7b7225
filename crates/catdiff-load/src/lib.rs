//! Catalog loading for catdiff.
//!
//! Turns message documents on disk into [`CatalogNode`](catdiff_types::CatalogNode)
//! trees. All failures name the document that could not be read or parsed,
//! and nothing is compared until both documents have loaded.
//!
//! # Key Types
//!
//! - [`Catalog`] -- A loaded document: label, source path, and tree
//! - [`parse_catalog`] / [`load_catalog`] -- Parse text or read a file
//! - [`discover_catalogs`] -- List the locale files of a messages directory

pub mod catalog;
pub mod discover;
pub mod error;

pub use catalog::{load_catalog, parse_catalog, Catalog};
pub use discover::{catalog_label, discover_catalogs, CATALOG_EXTENSION};
pub use error::{LoadError, LoadResult};
