//! Check execution: fetch a page, probe its resources, print the report.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::ConsoleReporter;
use sondar::{
    is_local_dev_host, meta, Page, ProbeOutcome, ProbeReport, ProbeRunner, Prober, ResourceKind,
};
use url::Url;

/// Runs the check and extract commands against a target page.
#[derive(Debug)]
pub struct CheckRunner {
    config: CliConfig,
    reporter: ConsoleReporter,
}

impl CheckRunner {
    /// Create a runner from CLI configuration.
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        let reporter = ConsoleReporter::new(config.color.should_color(), config.verbosity.is_quiet());
        Self { config, reporter }
    }

    /// Probe every resource the page references and print the report.
    /// Failing resources are report content, not process errors.
    pub async fn check(&self, url_arg: &str) -> CliResult<ProbeReport> {
        let url = parse_target(url_arg)?;
        tracing::debug!(%url, jobs = self.config.jobs, "starting resource check");
        let prober = Prober::new(self.config.probe_config());

        self.reporter.header("Resource check");
        self.reporter.info(&format!("URL: {url}"));
        self.reporter.info(&format!(
            "Time: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        if is_local_dev_host(&url) {
            self.reporter
                .info("Target is a local development address; checking it anyway");
        }

        let page = self.fetch_page(&prober, url).await?;
        let resources = self.config.extractor().extract(page.html(), page.url());
        self.reporter
            .info(&format!("Found {} resources to test", resources.total()));

        let runner = ProbeRunner::new(prober);
        let mut report = ProbeReport::new();
        for kind in ResourceKind::ALL {
            let references = resources.by_kind(kind);
            if references.is_empty() {
                continue;
            }
            self.reporter.info(&format!(
                "Testing {} ({})...",
                kind.category().to_lowercase(),
                references.len()
            ));
            for outcome in self.probe_kind(&runner, kind, references).await {
                report.record(outcome);
            }
        }

        if !self.config.skip_meta {
            self.audit_meta(&page);
        }

        self.reporter.report(&report);
        Ok(report)
    }

    /// List the references the page would be probed for, without probing.
    pub async fn extract(&self, url_arg: &str) -> CliResult<()> {
        let url = parse_target(url_arg)?;
        let prober = Prober::new(self.config.probe_config());

        self.reporter.header("Resource extraction");
        self.reporter.info(&format!("URL: {url}"));

        let page = self.fetch_page(&prober, url).await?;
        let resources = self.config.extractor().extract(page.html(), page.url());

        for kind in ResourceKind::ALL {
            let references = resources.by_kind(kind);
            if references.is_empty() {
                continue;
            }
            self.reporter
                .info(&format!("{} ({}):", kind.category(), references.len()));
            for reference in references {
                self.reporter.ok(&reference.describe());
            }
        }
        self.reporter
            .info(&format!("{} resources total", resources.total()));
        Ok(())
    }

    async fn fetch_page(&self, prober: &Prober, url: Url) -> CliResult<Page> {
        let spinner = self.reporter.spinner("Loading page...");
        let page = Page::fetch(prober.client(), url).await;
        spinner.finish_and_clear();
        Ok(page?)
    }

    /// Probe one category. Sequential probing prints each line as the
    /// probe completes; with fan-out the lines print once the category
    /// finishes, still in extraction order.
    async fn probe_kind(
        &self,
        runner: &ProbeRunner,
        kind: ResourceKind,
        references: &[sondar::ResourceRef],
    ) -> Vec<ProbeOutcome> {
        if self.config.jobs <= 1 {
            let mut outcomes = Vec::with_capacity(references.len());
            for reference in references {
                let outcome = runner.prober().probe(reference.clone()).await;
                self.reporter.outcome(&outcome);
                outcomes.push(outcome);
            }
            return outcomes;
        }

        let spinner = self
            .reporter
            .spinner(&format!("Probing {}...", kind.category().to_lowercase()));
        let outcomes = runner.probe_category(references).await;
        spinner.finish_and_clear();
        for outcome in &outcomes {
            self.reporter.outcome(outcome);
        }
        outcomes
    }

    fn audit_meta(&self, page: &Page) {
        let audit = meta::audit(page.html());
        self.reporter.header("Meta tags");
        self.reporter.info("Essential meta tags:");
        for status in &audit.essential {
            self.reporter.meta_status(status);
        }
        self.reporter.info("Open Graph tags:");
        for status in &audit.open_graph {
            self.reporter.meta_status(status);
        }
    }
}

/// Parse the target address, defaulting the scheme to https when missing.
fn parse_target(url_arg: &str) -> CliResult<Url> {
    match Url::parse(url_arg) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{url_arg}"))
                .map_err(|e| CliError::invalid_argument(format!("'{url_arg}': {e}")))
        }
        Err(e) => Err(CliError::invalid_argument(format!("'{url_arg}': {e}"))),
    }
}
