//! Catalog comparison: walk a reference and a candidate tree in lockstep.
//!
//! At every branch the walk reports, in order:
//!
//! 1. reference keys absent from the candidate (sorted),
//! 2. candidate keys absent from the reference (sorted),
//! 3. for each reference key in sorted order, either the discrepancies of
//!    the nested branches or a type mismatch when the candidate holds a
//!    scalar where the reference holds a branch.
//!
//! Only reference keys drive recursion. A candidate-only key is reported
//! once as an extra key and its subtree is never expanded.

use catdiff_types::{Branch, CatalogNode, ComparisonPath, NodeKind};
use tracing::debug;

use crate::discrepancy::{ComparisonResult, Discrepancy};
use crate::error::{DiffError, DiffResult, Side};
use crate::observer::{DiscrepancyObserver, NoopObserver};
use crate::policy::{ComparePolicy, LeafPolicy};

/// Compare two catalogs with the default policy.
///
/// ```
/// use catdiff_diff::{compare, Discrepancy};
/// use catdiff_types::CatalogNode;
///
/// let reference = CatalogNode::branch([
///     ("a", CatalogNode::branch([("b", CatalogNode::text("x")), ("c", CatalogNode::text("y"))])),
/// ]);
/// let candidate = CatalogNode::branch([
///     ("a", CatalogNode::branch([("b", CatalogNode::text("x"))])),
/// ]);
///
/// let result = compare(&reference, &candidate).unwrap();
/// assert_eq!(result.issues(), 1);
/// assert!(matches!(
///     &result.discrepancies()[0],
///     Discrepancy::MissingKey { path, key } if path.to_string() == "root.a" && key == "c"
/// ));
/// ```
pub fn compare(reference: &CatalogNode, candidate: &CatalogNode) -> DiffResult<ComparisonResult> {
    CatalogDiffer::default().compare(reference, candidate)
}

/// Structural comparison of catalogs under a [`ComparePolicy`].
///
/// A differ holds no per-run state, so one instance can be shared across
/// threads and reused for any number of comparisons.
#[derive(Clone, Debug, Default)]
pub struct CatalogDiffer {
    policy: ComparePolicy,
}

impl CatalogDiffer {
    pub fn new(policy: ComparePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ComparePolicy {
        &self.policy
    }

    /// Compare `candidate` against `reference`.
    ///
    /// Both roots must be branches. Fails with [`DiffError::InvalidInput`]
    /// otherwise, and with [`DiffError::DepthLimitExceeded`] if the walk
    /// nests deeper than the policy allows. No partial result is returned.
    pub fn compare(
        &self,
        reference: &CatalogNode,
        candidate: &CatalogNode,
    ) -> DiffResult<ComparisonResult> {
        self.compare_with(reference, candidate, &mut NoopObserver)
    }

    /// Like [`compare`](Self::compare), also handing every discrepancy to
    /// `observer` as soon as it is found.
    pub fn compare_with(
        &self,
        reference: &CatalogNode,
        candidate: &CatalogNode,
        observer: &mut dyn DiscrepancyObserver,
    ) -> DiffResult<ComparisonResult> {
        let reference = root_branch(reference, Side::Reference)?;
        let candidate = root_branch(candidate, Side::Candidate)?;

        let root = ComparisonPath::root(self.policy.root_label.as_str());
        debug!(
            root = %root,
            reference_keys = reference.len(),
            candidate_keys = candidate.len(),
            "comparing catalogs"
        );

        let mut walk = Walk {
            policy: &self.policy,
            observer,
            found: Vec::new(),
        };
        walk.branches(reference, candidate, &root)?;

        let result = ComparisonResult::new(walk.found);
        debug!(
            issues = result.issues(),
            missing = result.missing(),
            extra = result.extra(),
            mismatches = result.mismatches(),
            "comparison complete"
        );
        Ok(result)
    }
}

fn root_branch(node: &CatalogNode, side: Side) -> DiffResult<&Branch> {
    node.as_branch().ok_or(DiffError::InvalidInput {
        side,
        actual: node.kind(),
    })
}

struct Walk<'p, 'o> {
    policy: &'p ComparePolicy,
    observer: &'o mut dyn DiscrepancyObserver,
    found: Vec<Discrepancy>,
}

impl Walk<'_, '_> {
    fn emit(&mut self, discrepancy: Discrepancy) {
        self.observer.on_discrepancy(&discrepancy);
        self.found.push(discrepancy);
    }

    fn branches(
        &mut self,
        reference: &Branch,
        candidate: &Branch,
        path: &ComparisonPath,
    ) -> DiffResult<()> {
        if path.depth() > self.policy.max_depth {
            return Err(DiffError::DepthLimitExceeded {
                path: path.to_string(),
                limit: self.policy.max_depth,
            });
        }

        // BTreeMap iteration is sorted, so each group comes out in key order.
        for key in reference.keys().filter(|k| !candidate.contains_key(*k)) {
            self.emit(Discrepancy::MissingKey {
                path: path.clone(),
                key: key.clone(),
            });
        }
        for key in candidate.keys().filter(|k| !reference.contains_key(*k)) {
            self.emit(Discrepancy::ExtraKey {
                path: path.clone(),
                key: key.clone(),
            });
        }

        for (key, expected) in reference {
            let Some(actual) = candidate.get(key) else {
                continue;
            };
            match (expected, actual) {
                (CatalogNode::Branch(expected), CatalogNode::Branch(actual)) => {
                    self.branches(expected, actual, &path.child(key.as_str()))?;
                }
                (CatalogNode::Branch(_), CatalogNode::Scalar(scalar)) => {
                    self.emit(Discrepancy::TypeMismatch {
                        path: path.child(key.as_str()),
                        reference: NodeKind::Object,
                        candidate: scalar.kind(),
                    });
                }
                (CatalogNode::Scalar(scalar), actual) => {
                    if self.policy.leaf_policy == LeafPolicy::StrictKinds
                        && scalar.kind() != actual.kind()
                    {
                        self.emit(Discrepancy::TypeMismatch {
                            path: path.child(key.as_str()),
                            reference: scalar.kind(),
                            candidate: actual.kind(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
