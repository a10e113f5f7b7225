//! Foundation types for catdiff.
//!
//! A localization catalog is a tree of keyed branches ending in scalar
//! leaves. This crate provides the tree itself and the path type used to
//! locate nodes within it. The diff, load, and report crates all build on
//! these types.
//!
//! # Key Types
//!
//! - [`CatalogNode`] -- A branch (keyed children) or a scalar leaf
//! - [`Scalar`] -- String, number, boolean, or null leaf value
//! - [`NodeKind`] -- Reporting label for the kind of a node
//! - [`ComparisonPath`] -- Dot-joined location of a node, rooted at a sentinel

pub mod node;
pub mod path;

pub use node::{Branch, CatalogNode, NodeKind, Scalar};
pub use path::{ComparisonPath, DEFAULT_ROOT_LABEL};
