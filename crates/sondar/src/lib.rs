//! Sondar: reachability checks for a web page's resources.
//!
//! Sondar (Spanish: "to probe/sound out") loads a page, extracts its
//! resource references and probes each one for reachability, producing a
//! pass/fail report.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     SONDAR Pipeline                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌──────────┐    ┌───────────┐    ┌─────────┐    ┌──────────┐  │
//! │   │ Page     │    │ Resource  │    │ Probes  │    │ Probe    │  │
//! │   │ (HTML)   │───►│ Extractor │───►│ (HTTP)  │───►│ Report   │  │
//! │   └──────────┘    └───────────┘    └─────────┘    └──────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use sondar::{Extractor, Page, ProbeConfig, ProbeRunner, Prober};
//!
//! # async fn check() -> sondar::SondarResult<()> {
//! let prober = Prober::new(ProbeConfig::default());
//! let url = url::Url::parse("https://example.com/").unwrap();
//! let page = Page::fetch(prober.client(), url).await?;
//! let resources = Extractor::new().extract(page.html(), page.url());
//! let report = ProbeRunner::new(prober).run(&resources).await;
//! println!("{}", report.render());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod extract;
pub mod meta;
pub mod page;
pub mod probe;
pub mod report;
pub mod resource;
mod result;
pub mod runner;

pub use extract::{Extractor, DEFAULT_LINK_LIMIT};
pub use meta::{MetaReport, MetaTagStatus};
pub use page::{is_local_dev_host, Page};
pub use probe::{OpaquePolicy, ProbeConfig, ProbeOutcome, Prober, DEFAULT_TIMEOUT};
pub use report::{CategoryOutcomes, ProbeReport};
pub use resource::{PageResources, ResourceKind, ResourceRef};
pub use result::{SondarError, SondarResult};
pub use runner::ProbeRunner;
