//! Discrepancies and the result of a comparison.

use catdiff_types::{ComparisonPath, NodeKind};
use serde::Serialize;

/// A single structural difference between two catalogs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    /// `key` exists in the reference branch at `path` but not in the candidate.
    MissingKey { path: ComparisonPath, key: String },
    /// `key` exists in the candidate branch at `path` but not in the reference.
    ExtraKey { path: ComparisonPath, key: String },
    /// The node at `path` (key included) has a different kind on each side.
    TypeMismatch {
        path: ComparisonPath,
        reference: NodeKind,
        candidate: NodeKind,
    },
}

impl Discrepancy {
    /// Where the discrepancy was found.
    ///
    /// For missing and extra keys this is the parent branch; for type
    /// mismatches it is the mismatched node itself.
    pub fn path(&self) -> &ComparisonPath {
        match self {
            Self::MissingKey { path, .. }
            | Self::ExtraKey { path, .. }
            | Self::TypeMismatch { path, .. } => path,
        }
    }

    /// The offending key, if the discrepancy is about a key.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingKey { key, .. } | Self::ExtraKey { key, .. } => Some(key),
            Self::TypeMismatch { .. } => None,
        }
    }
}

/// The ordered discrepancies found by one comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    discrepancies: Vec<Discrepancy>,
}

impl ComparisonResult {
    pub(crate) fn new(discrepancies: Vec<Discrepancy>) -> Self {
        Self { discrepancies }
    }

    /// Discrepancies in discovery order.
    pub fn discrepancies(&self) -> &[Discrepancy] {
        &self.discrepancies
    }

    pub fn into_discrepancies(self) -> Vec<Discrepancy> {
        self.discrepancies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Discrepancy> {
        self.discrepancies.iter()
    }

    /// Total number of discrepancies.
    pub fn issues(&self) -> usize {
        self.discrepancies.len()
    }

    /// `true` when the candidate is structurally equivalent to the reference.
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// Number of missing keys.
    pub fn missing(&self) -> usize {
        self.discrepancies
            .iter()
            .filter(|d| matches!(d, Discrepancy::MissingKey { .. }))
            .count()
    }

    /// Number of extra keys.
    pub fn extra(&self) -> usize {
        self.discrepancies
            .iter()
            .filter(|d| matches!(d, Discrepancy::ExtraKey { .. }))
            .count()
    }

    /// Number of type mismatches.
    pub fn mismatches(&self) -> usize {
        self.discrepancies
            .iter()
            .filter(|d| matches!(d, Discrepancy::TypeMismatch { .. }))
            .count()
    }
}

impl<'a> IntoIterator for &'a ComparisonResult {
    type Item = &'a Discrepancy;
    type IntoIter = std::slice::Iter<'a, Discrepancy>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root() -> ComparisonPath {
        ComparisonPath::default()
    }

    #[test]
    fn counters_split_by_kind() {
        let result = ComparisonResult::new(vec![
            Discrepancy::MissingKey { path: root(), key: "a".into() },
            Discrepancy::MissingKey { path: root(), key: "b".into() },
            Discrepancy::ExtraKey { path: root(), key: "c".into() },
            Discrepancy::TypeMismatch {
                path: root().child("d"),
                reference: NodeKind::Object,
                candidate: NodeKind::String,
            },
        ]);
        assert_eq!(result.issues(), 4);
        assert_eq!(result.missing(), 2);
        assert_eq!(result.extra(), 1);
        assert_eq!(result.mismatches(), 1);
        assert!(!result.is_clean());
    }

    #[test]
    fn empty_result_is_clean() {
        let result = ComparisonResult::default();
        assert!(result.is_clean());
        assert_eq!(result.issues(), 0);
    }

    #[test]
    fn path_and_key_accessors() {
        let missing = Discrepancy::MissingKey { path: root().child("a"), key: "b".into() };
        assert_eq!(missing.path().to_string(), "root.a");
        assert_eq!(missing.key(), Some("b"));

        let mismatch = Discrepancy::TypeMismatch {
            path: root().child("a"),
            reference: NodeKind::Object,
            candidate: NodeKind::Number,
        };
        assert_eq!(mismatch.key(), None);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let d = Discrepancy::TypeMismatch {
            path: root().child("a").child("b"),
            reference: NodeKind::Object,
            candidate: NodeKind::String,
        };
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({
                "kind": "type_mismatch",
                "path": "root.a.b",
                "reference": "object",
                "candidate": "string",
            })
        );
    }
}
