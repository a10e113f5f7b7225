use std::fs;
use std::path::{Path, PathBuf};

use catdiff_types::CatalogNode;
use tracing::debug;

use crate::discover::catalog_label;
use crate::error::{LoadError, LoadResult};

/// A loaded catalog document.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    /// Short name used in reports, e.g. `en` for `messages/en.json`.
    pub label: String,
    /// Where the document was read from, if it came from disk.
    pub path: Option<PathBuf>,
    /// The parsed tree.
    pub root: CatalogNode,
}

impl Catalog {
    /// Wrap an in-memory tree.
    pub fn new(label: impl Into<String>, root: CatalogNode) -> Self {
        Self {
            label: label.into(),
            path: None,
            root,
        }
    }

    /// Replace the report label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Parse a JSON document into a catalog tree.
///
/// `label` only identifies the document in error messages. A leading UTF-8
/// byte order mark is ignored.
pub fn parse_catalog(label: &str, text: &str) -> LoadResult<CatalogNode> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    serde_json::from_str(text).map_err(|e| LoadError::MalformedDocument {
        label: label.to_string(),
        message: e.to_string(),
    })
}

/// Read and parse the catalog at `path`.
///
/// The catalog is labelled with the file stem; parse errors name the full
/// path.
pub fn load_catalog(path: &Path) -> LoadResult<Catalog> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root = parse_catalog(&path.display().to_string(), &text)?;
    debug!(
        path = %path.display(),
        leaves = root.leaf_count(),
        depth = root.depth(),
        "loaded catalog"
    );
    Ok(Catalog {
        label: catalog_label(path),
        path: Some(path.to_path_buf()),
        root,
    })
}
