//! Meta-tag presence audit.
//!
//! Purely informational: presence or absence of a tag never counts toward
//! probe totals.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Essential meta tag names, matched on `meta[name=...]`.
pub const ESSENTIAL_TAGS: [&str; 3] = ["viewport", "description", "robots"];

/// Open Graph property names, matched on `meta[property=...]`.
pub const OPEN_GRAPH_TAGS: [&str; 4] = ["og:title", "og:description", "og:type", "og:url"];

/// Characters of tag content kept in the report.
const CONTENT_PREVIEW_MAX: usize = 50;

/// Presence of a single meta tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTagStatus {
    /// Tag name or property
    pub name: String,
    /// First 50 characters of `content` when the tag is present
    pub content: Option<String>,
}

impl MetaTagStatus {
    /// Whether the tag was found on the page.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.content.is_some()
    }
}

/// Result of the meta-tag audit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaReport {
    /// Essential tags, in the order of [`ESSENTIAL_TAGS`]
    pub essential: Vec<MetaTagStatus>,
    /// Open Graph tags, in the order of [`OPEN_GRAPH_TAGS`]
    pub open_graph: Vec<MetaTagStatus>,
}

impl MetaReport {
    /// Number of audited tags missing from the page.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.essential
            .iter()
            .chain(self.open_graph.iter())
            .filter(|status| !status.is_present())
            .count()
    }
}

/// Audit `html` for the fixed essential and Open Graph tag lists.
#[must_use]
pub fn audit(html: &str) -> MetaReport {
    let document = Html::parse_document(html);
    MetaReport {
        essential: ESSENTIAL_TAGS
            .iter()
            .map(|name| lookup(&document, "name", name))
            .collect(),
        open_graph: OPEN_GRAPH_TAGS
            .iter()
            .map(|name| lookup(&document, "property", name))
            .collect(),
    }
}

fn lookup(document: &Html, attribute: &str, name: &str) -> MetaTagStatus {
    // Audited names are fixed identifiers; the selector always parses.
    let selector = Selector::parse(&format!("meta[{attribute}=\"{name}\"]")).unwrap();
    let content = document.select(&selector).next().map(|element| {
        element
            .value()
            .attr("content")
            .unwrap_or_default()
            .chars()
            .take(CONTENT_PREVIEW_MAX)
            .collect()
    });
    MetaTagStatus {
        name: name.to_string(),
        content,
    }
}
