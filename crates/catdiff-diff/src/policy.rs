use catdiff_types::DEFAULT_ROOT_LABEL;
use serde::{Deserialize, Serialize};

/// Default nesting limit. Message catalogs rarely go past five levels.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How leaf nodes are checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafPolicy {
    /// Only a reference branch facing a candidate scalar is a mismatch.
    #[default]
    Shape,
    /// Any pair of present nodes with different kinds is a mismatch,
    /// including `string` vs `number` and a reference scalar facing a
    /// candidate branch.
    StrictKinds,
}

/// Configuration for a comparison run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparePolicy {
    /// Label rendered for the root of every path.
    pub root_label: String,
    /// Maximum nesting depth walked before the comparison is aborted.
    pub max_depth: usize,
    /// How leaf nodes are checked.
    pub leaf_policy: LeafPolicy,
}

impl Default for ComparePolicy {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            leaf_policy: LeafPolicy::Shape,
        }
    }
}

impl ComparePolicy {
    /// Default policy with kind checks on every leaf.
    pub fn strict() -> Self {
        Self {
            leaf_policy: LeafPolicy::StrictKinds,
            ..Default::default()
        }
    }
}
