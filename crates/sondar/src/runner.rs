//! Run orchestration: probe every category in a fixed order.

use crate::probe::{ProbeOutcome, Prober};
use crate::report::ProbeReport;
use crate::resource::{PageResources, ResourceKind, ResourceRef};
use futures::{stream, StreamExt};

/// Drives a full probe run over extracted resources.
///
/// Categories always run one after another in the fixed order images →
/// stylesheets → scripts → favicons → links. Within a category, probes are
/// awaited strictly sequentially by default; with
/// [`ProbeConfig::concurrency`](crate::ProbeConfig) above 1, up to that many
/// probes are in flight at once and outcomes are still yielded in
/// extraction order, so the report is identical either way.
#[derive(Debug, Clone)]
pub struct ProbeRunner {
    prober: Prober,
}

impl ProbeRunner {
    /// Create a runner over a prober.
    #[must_use]
    pub fn new(prober: Prober) -> Self {
        Self { prober }
    }

    /// The underlying prober.
    #[must_use]
    pub fn prober(&self) -> &Prober {
        &self.prober
    }

    /// Probe one category, returning outcomes in extraction order.
    pub async fn probe_category(&self, references: &[ResourceRef]) -> Vec<ProbeOutcome> {
        let concurrency = self.prober.config().concurrency.max(1);
        if concurrency == 1 {
            let mut outcomes = Vec::with_capacity(references.len());
            for reference in references {
                outcomes.push(self.prober.probe(reference.clone()).await);
            }
            return outcomes;
        }

        // `buffered` bounds in-flight probes while preserving input order.
        stream::iter(references.iter().cloned())
            .map(|reference| self.prober.probe(reference))
            .buffered(concurrency)
            .collect()
            .await
    }

    /// The "run everything" entry point: probe all categories and return
    /// the finalized report.
    pub async fn run(&self, resources: &PageResources) -> ProbeReport {
        let mut report = ProbeReport::new();
        for kind in ResourceKind::ALL {
            for outcome in self.probe_category(resources.by_kind(kind)).await {
                report.record(outcome);
            }
        }
        report
    }
}
