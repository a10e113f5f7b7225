//! Structural diff engine for localization catalogs.
//!
//! Compares a reference catalog against a candidate catalog and reports
//! every shape difference at every depth. Leaf values are not compared: two
//! catalogs with the same keys in the same places are equivalent no matter
//! what their translated strings say.
//!
//! # Key Types
//!
//! - [`CatalogDiffer`] / [`compare`] -- Run a comparison
//! - [`Discrepancy`] -- Missing key, extra key, or type mismatch
//! - [`ComparisonResult`] -- Ordered discrepancies plus counters
//! - [`ComparePolicy`] / [`LeafPolicy`] -- Root label, depth guard, leaf checks
//! - [`DiscrepancyObserver`] -- Streaming hook called as discrepancies are found

pub mod differ;
pub mod discrepancy;
pub mod error;
pub mod observer;
pub mod policy;

pub use differ::{compare, CatalogDiffer};
pub use discrepancy::{ComparisonResult, Discrepancy};
pub use error::{DiffError, DiffResult, Side};
pub use observer::{DiscrepancyObserver, NoopObserver, TracingObserver};
pub use policy::{ComparePolicy, LeafPolicy, DEFAULT_MAX_DEPTH};
