//! Fetched page snapshot.
//!
//! The checks run against a snapshot of a page's HTML rather than a live
//! document: a [`Page`] couples the final (post-redirect) URL with the body
//! it served, and every extracted reference is resolved against that URL.

use crate::result::{SondarError, SondarResult};
use url::Url;

/// A page snapshot: final URL plus the HTML it served.
#[derive(Debug, Clone)]
pub struct Page {
    url: Url,
    html: String,
}

impl Page {
    /// Build a snapshot from an already-obtained HTML body.
    #[must_use]
    pub fn from_html(url: Url, html: impl Into<String>) -> Self {
        Self {
            url,
            html: html.into(),
        }
    }

    /// Fetch `url` and snapshot the response.
    ///
    /// Redirects are followed; the recorded URL is the one that finally
    /// served the page, so relative references resolve the way a browser
    /// would resolve them.
    ///
    /// # Errors
    ///
    /// Returns [`SondarError::PageLoad`] when the request fails or the
    /// server answers with a non-success status.
    pub async fn fetch(client: &reqwest::Client, url: Url) -> SondarResult<Self> {
        tracing::debug!(%url, "fetching page");
        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SondarError::page_load(url.as_str(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SondarError::page_load(
                url.as_str(),
                format!("status {}", status.as_u16()),
            ));
        }

        let final_url = response.url().clone();
        let html = response
            .text()
            .await
            .map_err(|e| SondarError::page_load(url.as_str(), e.to_string()))?;

        Ok(Self {
            url: final_url,
            html,
        })
    }

    /// The URL that served the page.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The page's HTML body.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Whether the page's host is a local-development address.
    #[must_use]
    pub fn is_local_dev(&self) -> bool {
        is_local_dev_host(&self.url)
    }
}

/// Whether `url` points at a local-development host (`localhost` or a
/// loopback address).
#[must_use]
pub fn is_local_dev_host(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}
