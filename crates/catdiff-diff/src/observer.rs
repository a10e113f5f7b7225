//! Streaming hooks invoked as discrepancies are discovered.
//!
//! The [`ComparisonResult`](crate::ComparisonResult) returned by a comparison
//! is always authoritative; observers only see the same discrepancies
//! earlier, in discovery order.

use tracing::debug;

use crate::discrepancy::Discrepancy;

/// Receives each discrepancy as soon as the traversal finds it.
pub trait DiscrepancyObserver {
    fn on_discrepancy(&mut self, discrepancy: &Discrepancy);
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl DiscrepancyObserver for NoopObserver {
    fn on_discrepancy(&mut self, _discrepancy: &Discrepancy) {}
}

/// Logs every discrepancy at `debug` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl DiscrepancyObserver for TracingObserver {
    fn on_discrepancy(&mut self, discrepancy: &Discrepancy) {
        match discrepancy {
            Discrepancy::MissingKey { path, key } => {
                debug!(%path, key = %key, "missing key");
            }
            Discrepancy::ExtraKey { path, key } => {
                debug!(%path, key = %key, "extra key");
            }
            Discrepancy::TypeMismatch {
                path,
                reference,
                candidate,
            } => {
                debug!(%path, %reference, %candidate, "type mismatch");
            }
        }
    }
}

/// Collects every discrepancy in discovery order.
impl DiscrepancyObserver for Vec<Discrepancy> {
    fn on_discrepancy(&mut self, discrepancy: &Discrepancy) {
        self.push(discrepancy.clone());
    }
}

impl<F> DiscrepancyObserver for F
where
    F: FnMut(&Discrepancy),
{
    fn on_discrepancy(&mut self, discrepancy: &Discrepancy) {
        self(discrepancy)
    }
}
