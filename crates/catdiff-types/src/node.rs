use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Children of a branch, ordered by key.
pub type Branch = BTreeMap<String, CatalogNode>;

/// One node of a catalog tree.
///
/// Branch children are kept in a `BTreeMap`, so iteration is always in
/// lexicographic key order. Sequences in the source document become branches
/// keyed by their decimal index (`"0"`, `"1"`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum CatalogNode {
    /// An internal node with keyed children.
    Branch(Branch),
    /// A leaf value.
    Scalar(Scalar),
}

/// A leaf value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// The reporting label for a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Object,
    String,
    Number,
    Boolean,
    Null,
}

impl NodeKind {
    /// The lowercase label used in reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Scalar {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Null => NodeKind::Null,
            Self::Bool(_) => NodeKind::Boolean,
            Self::Number(_) => NodeKind::Number,
            Self::String(_) => NodeKind::String,
        }
    }
}

impl CatalogNode {
    /// An empty branch.
    pub fn empty() -> Self {
        Self::Branch(Branch::new())
    }

    /// Build a branch from `(key, node)` pairs. Later duplicates win.
    pub fn branch<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, CatalogNode)>,
    {
        Self::Branch(children.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// A string leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(value.into()))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Branch(_) => NodeKind::Object,
            Self::Scalar(s) => s.kind(),
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// The children of this node, if it is a branch.
    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Self::Branch(children) => Some(children),
            Self::Scalar(_) => None,
        }
    }

    /// Look up a direct child by key. Always `None` for scalars.
    pub fn get(&self, key: &str) -> Option<&CatalogNode> {
        self.as_branch().and_then(|children| children.get(key))
    }

    /// Follow a sequence of keys from this node.
    pub fn get_path<'a, I>(&self, keys: I) -> Option<&CatalogNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        keys.into_iter().try_fold(self, |node, key| node.get(key))
    }

    /// Nesting depth: a scalar or an empty branch is depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch(children) => children
                .values()
                .map(|child| child.depth() + 1)
                .max()
                .unwrap_or(0),
            Self::Scalar(_) => 0,
        }
    }

    /// Number of scalar leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Branch(children) => children.values().map(CatalogNode::leaf_count).sum(),
            Self::Scalar(_) => 1,
        }
    }
}

impl From<Value> for CatalogNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Branch(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), Self::from(v)))
                    .collect(),
            ),
            Value::Object(map) => {
                Self::Branch(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<CatalogNode> for Value {
    fn from(node: CatalogNode) -> Self {
        match node {
            CatalogNode::Branch(children) => Value::Object(
                children
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map<String, Value>>(),
            ),
            CatalogNode::Scalar(Scalar::Null) => Value::Null,
            CatalogNode::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            CatalogNode::Scalar(Scalar::Number(n)) => Value::Number(n),
            CatalogNode::Scalar(Scalar::String(s)) => Value::String(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_becomes_branch() {
        let node = CatalogNode::from(json!({"a": {"b": "x"}}));
        assert!(node.is_branch());
        assert_eq!(node.get_path(["a", "b"]), Some(&CatalogNode::text("x")));
    }

    #[test]
    fn scalar_kinds() {
        assert_eq!(CatalogNode::from(json!("s")).kind(), NodeKind::String);
        assert_eq!(CatalogNode::from(json!(1.5)).kind(), NodeKind::Number);
        assert_eq!(CatalogNode::from(json!(true)).kind(), NodeKind::Boolean);
        assert_eq!(CatalogNode::from(json!(null)).kind(), NodeKind::Null);
        assert_eq!(CatalogNode::from(json!({})).kind(), NodeKind::Object);
    }

    #[test]
    fn arrays_are_keyed_by_index() {
        let node = CatalogNode::from(json!({"days": ["mon", "tue"]}));
        let days = node.get("days").unwrap();
        assert_eq!(days.kind(), NodeKind::Object);
        assert_eq!(days.get("1"), Some(&CatalogNode::text("tue")));
    }

    #[test]
    fn get_on_scalar_is_none() {
        assert!(CatalogNode::text("x").get("a").is_none());
    }

    #[test]
    fn depth_and_leaves() {
        let node = CatalogNode::from(json!({"a": {"b": {"c": 1}}, "d": "x"}));
        assert_eq!(node.depth(), 3);
        assert_eq!(node.leaf_count(), 2);
        assert_eq!(CatalogNode::empty().depth(), 0);
        assert_eq!(CatalogNode::empty().leaf_count(), 0);
    }

    #[test]
    fn deserializes_directly() {
        let node: CatalogNode = serde_json::from_str(r#"{"nav": {"home": "Home"}}"#).unwrap();
        assert_eq!(node.get_path(["nav", "home"]), Some(&CatalogNode::text("Home")));
    }

    #[test]
    fn serializes_as_plain_json() {
        let node = CatalogNode::branch([("a", CatalogNode::text("x"))]);
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({"a": "x"}));
    }

    #[test]
    fn kind_labels() {
        assert_eq!(NodeKind::Object.to_string(), "object");
        assert_eq!(NodeKind::Boolean.to_string(), "boolean");
        assert_eq!(serde_json::to_string(&NodeKind::Null).unwrap(), "\"null\"");
    }
}
