//! Per-kind reachability probes.
//!
//! Every probe is async and infallible at the call site: network errors,
//! bad statuses and undecodable bodies are captured in the returned
//! [`ProbeOutcome`], never propagated.
//!
//! Non-image kinds are probed with a header-only request. Images are
//! fetched in full and their bytes checked for decodability, since a
//! header-only probe cannot tell a real image from an error page.

use crate::resource::{ResourceKind, ResourceRef};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-probe timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How to classify a response a header-only probe cannot introspect.
///
/// Some servers reject `HEAD` outright (405, 501) without saying anything
/// about the resource itself. The lenient policy counts those as reachable,
/// mirroring the cross-origin tolerance of in-browser checks; the strict
/// policy counts them as failures. Lenient can mask genuine failures, which
/// is why the policy is overridable rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpaquePolicy {
    /// Non-introspectable responses count as success
    #[default]
    Lenient,
    /// Non-introspectable responses count as failure
    Strict,
}

impl OpaquePolicy {
    /// Whether this policy classifies non-introspectable responses as
    /// success.
    #[must_use]
    pub const fn treats_as_success(self) -> bool {
        matches!(self, Self::Lenient)
    }
}

/// Probe configuration.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Per-probe timeout
    pub timeout: Duration,
    /// Classification of non-introspectable responses
    pub opaque_policy: OpaquePolicy,
    /// Probes in flight at once within a category (1 = strictly sequential)
    pub concurrency: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            opaque_policy: OpaquePolicy::default(),
            concurrency: 1,
        }
    }
}

impl ProbeConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-probe timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the opaque-response policy.
    #[must_use]
    pub const fn with_opaque_policy(mut self, policy: OpaquePolicy) -> Self {
        self.opaque_policy = policy;
        self
    }

    /// Set the in-flight probe bound (clamped to at least 1).
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

/// Result of probing one resource. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeOutcome {
    /// The probed reference
    pub reference: ResourceRef,
    /// Whether the resource is reachable
    pub succeeded: bool,
    /// Status code or error message, when there is something to say
    pub detail: Option<String>,
}

impl ProbeOutcome {
    /// A successful probe.
    #[must_use]
    pub fn pass(reference: ResourceRef) -> Self {
        Self {
            reference,
            succeeded: true,
            detail: None,
        }
    }

    /// A successful probe with an explanatory note.
    #[must_use]
    pub fn pass_with(reference: ResourceRef, detail: impl Into<String>) -> Self {
        Self {
            reference,
            succeeded: true,
            detail: Some(detail.into()),
        }
    }

    /// A failed probe.
    #[must_use]
    pub fn fail(reference: ResourceRef, detail: impl Into<String>) -> Self {
        Self {
            reference,
            succeeded: false,
            detail: Some(detail.into()),
        }
    }
}

/// Issues reachability probes over a shared HTTP client.
#[derive(Debug, Clone)]
pub struct Prober {
    client: reqwest::Client,
    config: ProbeConfig,
}

impl Prober {
    /// Create a prober with its own HTTP client.
    #[must_use]
    pub fn new(config: ProbeConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    /// Create a prober over a custom client (proxies, extra headers, etc.).
    /// The client's own timeout wins over `config.timeout`.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: ProbeConfig) -> Self {
        Self { client, config }
    }

    /// The underlying HTTP client, shared with page fetching.
    #[must_use]
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probe one resource with the strategy for its kind. Never fails;
    /// failures are captured in the outcome.
    pub async fn probe(&self, reference: ResourceRef) -> ProbeOutcome {
        let outcome = match reference.kind {
            ResourceKind::Image => self.probe_image(reference).await,
            _ => self.probe_head(reference).await,
        };
        tracing::debug!(
            url = %outcome.reference.url,
            kind = %outcome.reference.kind,
            succeeded = outcome.succeeded,
            detail = outcome.detail.as_deref().unwrap_or(""),
            "probe finished"
        );
        outcome
    }

    /// Image strategy: fetch the body and verify it decodes as an image.
    /// Bodies the decoder does not understand fall back to the served
    /// `Content-Type` for vector formats such as SVG.
    async fn probe_image(&self, reference: ResourceRef) -> ProbeOutcome {
        let response = match self.client.get(reference.url.clone()).send().await {
            Ok(response) => response,
            Err(error) => {
                let detail = self.error_detail(&error);
                return ProbeOutcome::fail(reference, detail);
            }
        };

        let status = response.status();
        if !status.is_success() {
            return ProbeOutcome::fail(reference, format!("status {}", status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase);

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(error) => {
                let detail = self.error_detail(&error);
                return ProbeOutcome::fail(reference, detail);
            }
        };

        if image::load_from_memory(&bytes).is_ok() {
            return ProbeOutcome::pass(reference);
        }
        if content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/svg"))
        {
            return ProbeOutcome::pass(reference);
        }
        ProbeOutcome::fail(reference, "body is not a decodable image")
    }

    /// Header-only strategy for stylesheets, scripts, favicons and links.
    async fn probe_head(&self, reference: ResourceRef) -> ProbeOutcome {
        let response = match self.client.head(reference.url.clone()).send().await {
            Ok(response) => response,
            Err(error) => {
                let detail = self.error_detail(&error);
                return ProbeOutcome::fail(reference, detail);
            }
        };

        let status = response.status();
        if status.is_success() {
            return ProbeOutcome::pass(reference);
        }
        if is_opaque_status(status) && self.config.opaque_policy.treats_as_success() {
            return ProbeOutcome::pass_with(
                reference,
                format!("status {}, header probe unsupported", status.as_u16()),
            );
        }
        ProbeOutcome::fail(reference, format!("status {}", status.as_u16()))
    }

    fn error_detail(&self, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!("timed out after {}ms", self.config.timeout.as_millis())
        } else {
            error.to_string()
        }
    }
}

/// Statuses that say nothing about the resource when answering a `HEAD`.
fn is_opaque_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED
    )
}
