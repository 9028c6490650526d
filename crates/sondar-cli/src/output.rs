//! Console output for checks and reports

use console::{style, Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use sondar::{MetaTagStatus, ProbeOutcome, ProbeReport, ResourceKind};
use std::time::Duration;

const RULE_WIDTH: usize = 70;

/// Writes check progress and the final report to the terminal.
#[derive(Debug)]
pub struct ConsoleReporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl ConsoleReporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
            quiet,
        }
    }

    /// Print a boxed section header
    pub fn header(&self, title: &str) {
        if self.quiet {
            return;
        }
        let rule = "=".repeat(RULE_WIDTH);
        let centered = format!("{:^width$}", title, width = RULE_WIDTH);
        let heading = self.maybe(Style::new().cyan().bold());
        let _ = self.term.write_line("");
        let _ = self.term.write_line(&heading.apply_to(&rule).to_string());
        let _ = self
            .term
            .write_line(&heading.apply_to(centered.trim_end()).to_string());
        let _ = self.term.write_line(&heading.apply_to(&rule).to_string());
    }

    /// Print a success line
    pub fn ok(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "PASS".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a failure line (shown even in quiet mode)
    pub fn fail(&self, message: &str) {
        let prefix = if self.use_color {
            style("✗").red().bold().to_string()
        } else {
            "FAIL".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a warning line
    pub fn warn(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("⚠").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print an info line
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("ℹ").blue().bold().to_string()
        } else {
            "INFO".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Start a spinner with a message; caller finishes it
    #[must_use]
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }

    /// Print one probe outcome as a pass/fail line
    pub fn outcome(&self, outcome: &ProbeOutcome) {
        let label = outcome.reference.kind.label();
        let described = outcome.reference.describe();
        match (&outcome.succeeded, &outcome.detail) {
            (true, None) => self.ok(&format!("{label}: {described}")),
            (true, Some(detail)) => self.ok(&format!("{label}: {described} ({detail})")),
            (false, detail) => {
                let detail = detail.as_deref().unwrap_or("failed");
                self.fail(&format!("{label}: {described} ({detail})"));
            }
        }
    }

    /// Print one meta-tag status line
    pub fn meta_status(&self, status: &MetaTagStatus) {
        match &status.content {
            Some(content) => self.ok(&format!("{}: {content}", status.name)),
            None => self.warn(&format!("{}: not found", status.name)),
        }
    }

    /// Print the final report: totals, success rate, per-kind breakdown,
    /// closing line
    pub fn report(&self, report: &ProbeReport) {
        self.header("Final report");
        if self.quiet && report.all_passed() {
            return;
        }

        let bold = self.maybe(Style::new().bold());
        let green = self.maybe(Style::new().green());
        let red = self.maybe(Style::new().red());

        let _ = self
            .term
            .write_line(&bold.apply_to("Summary:").to_string());
        let _ = self
            .term
            .write_line(&format!("  Resources tested: {}", report.total()));
        let _ = self.term.write_line(&format!(
            "  {}",
            green.apply_to(format!("✓ Passed: {}", report.passed()))
        ));
        let _ = self.term.write_line(&format!(
            "  {}",
            red.apply_to(format!("✗ Failed: {}", report.failed()))
        ));
        if let Some(rate) = report.success_rate() {
            let _ = self.term.write_line(&format!(
                "\n  {}",
                bold.apply_to(format!("Success rate: {rate:.1}%"))
            ));
        }

        let _ = self.term.write_line("");
        let _ = self
            .term
            .write_line(&bold.apply_to("Breakdown by kind:").to_string());
        for kind in ResourceKind::ALL {
            let category = report.category(kind);
            if category.total() == 0 {
                continue;
            }
            let line = format!(
                "  {}: {}/{} OK",
                kind.category(),
                category.ok.len(),
                category.total()
            );
            let styled = if category.all_passed() {
                green.apply_to(line)
            } else {
                red.apply_to(line)
            };
            let _ = self.term.write_line(&styled.to_string());
            for failed in &category.failed {
                let _ = self.term.write_line(&format!(
                    "    {}",
                    red.apply_to(format!("✗ {}", failed.reference.url))
                ));
            }
        }

        let _ = self.term.write_line("");
        if report.all_passed() {
            let _ = self.term.write_line(
                &self
                    .maybe(Style::new().green().bold())
                    .apply_to("✓ All resources passed")
                    .to_string(),
            );
        } else {
            let _ = self.term.write_line(
                &self
                    .maybe(Style::new().red().bold())
                    .apply_to(format!("✗ {} resources failed the check", report.failed()))
                    .to_string(),
            );
        }
    }

    fn maybe(&self, style: Style) -> Style {
        if self.use_color {
            style.force_styling(true)
        } else {
            Style::new()
        }
    }
}
