//! Resource extraction from parsed HTML.
//!
//! A pure read over a document snapshot: scan for resource-bearing elements,
//! resolve every address against the page URL, and group the results by
//! kind in document order.

use crate::resource::{PageResources, ResourceRef};
use scraper::{Html, Selector};
use std::sync::OnceLock;
use url::Url;

/// Default cap on extracted hyperlinks, bounding probe volume.
pub const DEFAULT_LINK_LIMIT: usize = 20;

// Cache the fixed selectors; Selector::parse is moderately expensive and
// these never change.
static IMG_SELECTOR: OnceLock<Selector> = OnceLock::new();
static STYLESHEET_SELECTOR: OnceLock<Selector> = OnceLock::new();
static SCRIPT_SELECTOR: OnceLock<Selector> = OnceLock::new();
static ICON_SELECTOR: OnceLock<Selector> = OnceLock::new();
static ANCHOR_SELECTOR: OnceLock<Selector> = OnceLock::new();

fn img_selector() -> &'static Selector {
    IMG_SELECTOR.get_or_init(|| Selector::parse("img[src]").unwrap())
}
fn stylesheet_selector() -> &'static Selector {
    STYLESHEET_SELECTOR.get_or_init(|| Selector::parse("link[rel=\"stylesheet\"]").unwrap())
}
fn script_selector() -> &'static Selector {
    SCRIPT_SELECTOR.get_or_init(|| Selector::parse("script[src]").unwrap())
}
fn icon_selector() -> &'static Selector {
    ICON_SELECTOR.get_or_init(|| Selector::parse("link[rel*=\"icon\"]").unwrap())
}
fn anchor_selector() -> &'static Selector {
    ANCHOR_SELECTOR.get_or_init(|| Selector::parse("a[href]").unwrap())
}

/// Scans a document and produces the set of resource references to probe.
#[derive(Debug, Clone)]
pub struct Extractor {
    link_limit: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            link_limit: DEFAULT_LINK_LIMIT,
        }
    }
}

impl Extractor {
    /// Create an extractor with the default link cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hyperlink cap.
    #[must_use]
    pub const fn with_link_limit(mut self, limit: usize) -> Self {
        self.link_limit = limit;
        self
    }

    /// Extract all probeable references from `html`, resolving addresses
    /// against `base`. References whose address cannot be resolved are
    /// skipped.
    #[must_use]
    pub fn extract(&self, html: &str, base: &Url) -> PageResources {
        let document = Html::parse_document(html);
        let mut resources = PageResources::new();

        for element in document.select(img_selector()) {
            let Some(url) = resolve(base, element.value().attr("src")) else {
                continue;
            };
            resources.push(ResourceRef::image(url, element.value().attr("alt")));
        }

        for element in document.select(stylesheet_selector()) {
            let Some(url) = resolve(base, element.value().attr("href")) else {
                continue;
            };
            resources.push(ResourceRef::stylesheet(url));
        }

        for element in document.select(script_selector()) {
            let Some(url) = resolve(base, element.value().attr("src")) else {
                continue;
            };
            resources.push(ResourceRef::script(url));
        }

        for element in document.select(icon_selector()) {
            let Some(url) = resolve(base, element.value().attr("href")) else {
                continue;
            };
            resources.push(ResourceRef::favicon(url, element.value().attr("sizes")));
        }

        for element in document.select(anchor_selector()) {
            if resources.links.len() >= self.link_limit {
                break;
            }
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if !qualifies_as_link(href) {
                continue;
            }
            let Some(url) = resolve(base, Some(href)) else {
                continue;
            };
            let text: String = element.text().collect();
            resources.push(ResourceRef::link(url, &text));
        }

        tracing::debug!(
            images = resources.images.len(),
            stylesheets = resources.stylesheets.len(),
            scripts = resources.scripts.len(),
            favicons = resources.favicons.len(),
            links = resources.links.len(),
            "extracted page resources"
        );

        resources
    }
}

/// A hyperlink qualifies unless it is empty, a same-page fragment, or a
/// script-execution pseudo-address.
fn qualifies_as_link(href: &str) -> bool {
    let href = href.trim();
    !href.is_empty() && !href.starts_with('#') && !href.starts_with("javascript:")
}

fn resolve(base: &Url, raw: Option<&str>) -> Option<Url> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    base.join(raw).ok()
}
