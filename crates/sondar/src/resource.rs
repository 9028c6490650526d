//! Resource references extracted from a page.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Maximum characters of visible link text kept on a reference.
pub const LINK_TEXT_MAX: usize = 50;

/// Placeholder note for images without alt text.
pub const MISSING_ALT: &str = "(no alt text)";

/// Placeholder note for favicons without a declared size.
pub const MISSING_SIZES: &str = "N/A";

/// Kind of page resource a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Embedded image (`img[src]`)
    Image,
    /// Linked stylesheet (`link[rel="stylesheet"]`)
    Stylesheet,
    /// External script (`script[src]`)
    Script,
    /// Icon link relation (`link[rel*="icon"]`)
    Favicon,
    /// Hyperlink (`a[href]`)
    Link,
}

impl ResourceKind {
    /// All kinds, in the fixed probe order.
    pub const ALL: [Self; 5] = [
        Self::Image,
        Self::Stylesheet,
        Self::Script,
        Self::Favicon,
        Self::Link,
    ];

    /// Singular label, used for per-resource console lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Stylesheet => "Stylesheet",
            Self::Script => "Script",
            Self::Favicon => "Favicon",
            Self::Link => "Link",
        }
    }

    /// Plural category name, used in the report breakdown.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::Image => "Images",
            Self::Stylesheet => "Stylesheets",
            Self::Script => "Scripts",
            Self::Favicon => "Favicons",
            Self::Link => "Links",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One resource to probe: an absolute address, its kind, and kind-specific
/// metadata (alt text, declared sizes, visible link text). Immutable once
/// extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Absolute resource address
    pub url: Url,
    /// What the reference points at
    pub kind: ResourceKind,
    /// Kind-specific metadata
    pub note: Option<String>,
}

impl ResourceRef {
    /// An image reference; `alt` defaults to a placeholder when absent.
    #[must_use]
    pub fn image(url: Url, alt: Option<&str>) -> Self {
        let alt = match alt {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => MISSING_ALT.to_string(),
        };
        Self {
            url,
            kind: ResourceKind::Image,
            note: Some(alt),
        }
    }

    /// A stylesheet reference.
    #[must_use]
    pub fn stylesheet(url: Url) -> Self {
        Self {
            url,
            kind: ResourceKind::Stylesheet,
            note: None,
        }
    }

    /// A script reference.
    #[must_use]
    pub fn script(url: Url) -> Self {
        Self {
            url,
            kind: ResourceKind::Script,
            note: None,
        }
    }

    /// A favicon reference; `sizes` defaults to "N/A" when absent.
    #[must_use]
    pub fn favicon(url: Url, sizes: Option<&str>) -> Self {
        let sizes = match sizes {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => MISSING_SIZES.to_string(),
        };
        Self {
            url,
            kind: ResourceKind::Favicon,
            note: Some(sizes),
        }
    }

    /// A hyperlink reference; visible text is trimmed and truncated to
    /// [`LINK_TEXT_MAX`] characters.
    #[must_use]
    pub fn link(url: Url, text: &str) -> Self {
        Self {
            url,
            kind: ResourceKind::Link,
            note: Some(truncate_chars(text.trim(), LINK_TEXT_MAX)),
        }
    }

    /// Console description: the address, plus declared sizes for favicons.
    #[must_use]
    pub fn describe(&self) -> String {
        match (self.kind, &self.note) {
            (ResourceKind::Favicon, Some(sizes)) => format!("{} ({sizes})", self.url),
            _ => self.url.to_string(),
        }
    }
}

/// Resources grouped by kind, document order preserved within each kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageResources {
    /// Embedded images
    pub images: Vec<ResourceRef>,
    /// Linked stylesheets
    pub stylesheets: Vec<ResourceRef>,
    /// External scripts
    pub scripts: Vec<ResourceRef>,
    /// Icon link relations
    pub favicons: Vec<ResourceRef>,
    /// Qualifying hyperlinks
    pub links: Vec<ResourceRef>,
}

impl PageResources {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of references across all kinds.
    #[must_use]
    pub fn total(&self) -> usize {
        ResourceKind::ALL
            .iter()
            .map(|kind| self.by_kind(*kind).len())
            .sum()
    }

    /// Whether no references were extracted at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// References of one kind, in document order.
    #[must_use]
    pub fn by_kind(&self, kind: ResourceKind) -> &[ResourceRef] {
        match kind {
            ResourceKind::Image => &self.images,
            ResourceKind::Stylesheet => &self.stylesheets,
            ResourceKind::Script => &self.scripts,
            ResourceKind::Favicon => &self.favicons,
            ResourceKind::Link => &self.links,
        }
    }

    pub(crate) fn push(&mut self, reference: ResourceRef) {
        match reference.kind {
            ResourceKind::Image => self.images.push(reference),
            ResourceKind::Stylesheet => self.stylesheets.push(reference),
            ResourceKind::Script => self.scripts.push(reference),
            ResourceKind::Favicon => self.favicons.push(reference),
            ResourceKind::Link => self.links.push(reference),
        }
    }
}

/// Truncate to at most `max` characters, respecting char boundaries.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
