//! Location of a node inside a catalog tree.
//!
//! A path is a root sentinel followed by the keys leading to the node,
//! rendered dot-joined: `root.nav.home`. The root alone renders as the
//! sentinel. Keys are stored unescaped, so a key containing `.` renders
//! ambiguously; paths are meant for humans, not for lookup.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Sentinel used for the root of a comparison unless configured otherwise.
pub const DEFAULT_ROOT_LABEL: &str = "root";

/// An ordered sequence of keys from the root to a node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComparisonPath {
    root: Arc<str>,
    keys: Vec<String>,
}

impl ComparisonPath {
    /// The root path, labelled with `label`.
    pub fn root(label: impl Into<Arc<str>>) -> Self {
        Self {
            root: label.into(),
            keys: Vec::new(),
        }
    }

    /// The path of the child `key` below this one.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend_from_slice(&self.keys);
        keys.push(key.into());
        Self {
            root: Arc::clone(&self.root),
            keys,
        }
    }

    /// The root sentinel.
    pub fn root_label(&self) -> &str {
        &self.root
    }

    /// Keys below the root, outermost first.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of keys below the root. The root itself has depth 0.
    pub fn depth(&self) -> usize {
        self.keys.len()
    }

    pub fn is_root(&self) -> bool {
        self.keys.is_empty()
    }

    /// The last key, or `None` at the root.
    pub fn leaf_key(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }
}

impl Default for ComparisonPath {
    fn default() -> Self {
        Self::root(DEFAULT_ROOT_LABEL)
    }
}

impl fmt::Display for ComparisonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for key in &self.keys {
            write!(f, ".{key}")?;
        }
        Ok(())
    }
}

impl Serialize for ComparisonPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_as_sentinel() {
        let path = ComparisonPath::default();
        assert_eq!(path.to_string(), "root");
        assert!(path.is_root());
        assert_eq!(path.leaf_key(), None);
    }

    #[test]
    fn children_are_dot_joined() {
        let path = ComparisonPath::default().child("a").child("b");
        assert_eq!(path.to_string(), "root.a.b");
        assert_eq!(path.depth(), 2);
        assert_eq!(path.leaf_key(), Some("b"));
    }

    #[test]
    fn child_leaves_parent_untouched() {
        let parent = ComparisonPath::default().child("a");
        let _ = parent.child("b");
        assert_eq!(parent.to_string(), "root.a");
    }

    #[test]
    fn custom_root_label() {
        let path = ComparisonPath::root("messages").child("nav");
        assert_eq!(path.to_string(), "messages.nav");
        assert_eq!(path.root_label(), "messages");
    }

    #[test]
    fn serializes_as_string() {
        let path = ComparisonPath::default().child("x");
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"root.x\"");
    }
}
