//! Probe aggregation and report rendering.

use crate::probe::ProbeOutcome;
use crate::resource::ResourceKind;
use serde::{Deserialize, Serialize};

/// Ok/failed outcomes for one resource category, extraction order
/// preserved within each list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryOutcomes {
    /// Outcomes that succeeded
    pub ok: Vec<ProbeOutcome>,
    /// Outcomes that failed
    pub failed: Vec<ProbeOutcome>,
}

impl CategoryOutcomes {
    /// Number of resources probed in this category.
    #[must_use]
    pub fn total(&self) -> usize {
        self.ok.len() + self.failed.len()
    }

    /// Whether every probed resource in this category succeeded.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Aggregate of all probe outcomes for one run.
///
/// Built incrementally with [`record`](Self::record); counters are kept
/// private so `passed() + failed() == total()` holds by construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeReport {
    images: CategoryOutcomes,
    stylesheets: CategoryOutcomes,
    scripts: CategoryOutcomes,
    favicons: CategoryOutcomes,
    links: CategoryOutcomes,
    total: usize,
    passed: usize,
    failed: usize,
}

impl ProbeReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one outcome into its category's ok or failed list.
    pub fn record(&mut self, outcome: ProbeOutcome) {
        self.total += 1;
        if outcome.succeeded {
            self.passed += 1;
        } else {
            self.failed += 1;
        }

        let category = self.category_mut(outcome.reference.kind);
        if outcome.succeeded {
            category.ok.push(outcome);
        } else {
            category.failed.push(outcome);
        }
    }

    /// Total resources probed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Resources that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Resources that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Whether no resource failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Success rate as a percentage, `None` when nothing was probed.
    #[must_use]
    pub fn success_rate(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.passed as f64 / self.total as f64 * 100.0)
        }
    }

    /// Outcomes for one category.
    #[must_use]
    pub fn category(&self, kind: ResourceKind) -> &CategoryOutcomes {
        match kind {
            ResourceKind::Image => &self.images,
            ResourceKind::Stylesheet => &self.stylesheets,
            ResourceKind::Script => &self.scripts,
            ResourceKind::Favicon => &self.favicons,
            ResourceKind::Link => &self.links,
        }
    }

    fn category_mut(&mut self, kind: ResourceKind) -> &mut CategoryOutcomes {
        match kind {
            ResourceKind::Image => &mut self.images,
            ResourceKind::Stylesheet => &mut self.stylesheets,
            ResourceKind::Script => &mut self.scripts,
            ResourceKind::Favicon => &mut self.favicons,
            ResourceKind::Link => &mut self.links,
        }
    }

    /// One-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.success_rate() {
            Some(rate) => format!("{}/{} passed ({rate:.1}%)", self.passed, self.total),
            None => "0/0 passed".to_string(),
        }
    }

    /// Render the full plain-text report: totals, success rate,
    /// per-category breakdown with failed addresses, closing line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("Summary:\n");
        out.push_str(&format!("  Resources tested: {}\n", self.total));
        out.push_str(&format!("  Passed: {}\n", self.passed));
        out.push_str(&format!("  Failed: {}\n", self.failed));
        if let Some(rate) = self.success_rate() {
            out.push_str(&format!("\n  Success rate: {rate:.1}%\n"));
        }

        let mut breakdown = String::new();
        for kind in ResourceKind::ALL {
            let category = self.category(kind);
            if category.total() == 0 {
                continue;
            }
            breakdown.push_str(&format!(
                "  {}: {}/{} OK\n",
                kind.category(),
                category.ok.len(),
                category.total()
            ));
            for outcome in &category.failed {
                breakdown.push_str(&format!("    ✗ {}\n", outcome.reference.url));
            }
        }
        if !breakdown.is_empty() {
            out.push_str("\nBreakdown by kind:\n");
            out.push_str(&breakdown);
        }

        out.push('\n');
        if self.failed == 0 {
            out.push_str("✓ All resources passed\n");
        } else {
            out.push_str(&format!("✗ {} resources failed the check\n", self.failed));
        }

        out
    }
}
