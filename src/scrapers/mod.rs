//! Fact-check site scrapers.
//!
//! Scraping follows a page-by-page pattern:
//!
//! 1. **Fetching**: download results page `N` through [`crate::fetch::RetryFetch`]
//! 2. **Listing**: select listing containers with the site's ordered strategies
//! 3. **Extracting**: pull link, title and teaser out of each container
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | ColombiaCheck | [`colombiacheck`] | HTML scraping | Paginated via `?page=N` |
//!
//! The site structure lives in a [`SiteProfile`]; the collection loop itself
//! does not know about any particular markup.

pub mod colombiacheck;

use crate::error::{Result, ScrapeError};
use crate::utils::collapse_whitespace;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Compile a CSS selector, mapping failures into [`ScrapeError::Selector`].
#[inline]
pub fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|e| ScrapeError::Selector(format!("{sel_str}: {e}")))
}

/// Fixed markup contract for one fact-check site.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    /// Human readable site name, used in logs.
    pub name: &'static str,
    /// Origin prefixed to relative links, e.g. `https://colombiacheck.com`.
    pub base_origin: &'static str,
    /// Results page URL with a `{page}` placeholder.
    pub page_template: &'static str,
    /// Listing container strategies, tried in order until one matches.
    pub listing_selectors: Vec<Selector>,
    /// Anchor carrying the article link inside a container.
    pub link_selector: Selector,
    /// Headline inside a container.
    pub title_selector: Selector,
    /// Teaser paragraph inside a container.
    pub body_selector: Selector,
}

impl SiteProfile {
    /// URL of results page `page` (1-based).
    pub fn page_url(&self, page: usize) -> String {
        self.page_template.replace("{page}", &page.to_string())
    }

    /// Turn an `href` into an absolute URL.
    ///
    /// Links that already start with `http` are kept verbatim; anything else
    /// gets the site origin prepended as-is, with no path normalization.
    /// Returns `None` for an empty link.
    pub fn resolve_link(&self, href: &str) -> Option<String> {
        if href.is_empty() {
            return None;
        }
        if href.starts_with("http") {
            return Some(href.to_string());
        }
        Some(format!("{}{}", self.base_origin, href))
    }

    /// Select listing containers, falling through the strategies in order.
    ///
    /// Returns the first non-empty match in document order, or an empty
    /// vector when no strategy matches.
    pub fn select_listings<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        for (strategy, selector) in self.listing_selectors.iter().enumerate() {
            let containers: Vec<ElementRef<'a>> = document.select(selector).collect();
            if !containers.is_empty() {
                debug!(strategy, count = containers.len(), "Listing strategy matched");
                return containers;
            }
        }
        Vec::new()
    }
}

/// Pull the `(title, description)` pair out of one listing container.
///
/// Missing elements yield empty strings. Text is normalized with
/// [`collapse_whitespace`].
pub fn extract_fields(
    container: ElementRef<'_>,
    title_selector: &Selector,
    body_selector: &Selector,
) -> (String, String) {
    let title = stripped_text(container, title_selector);
    let description = stripped_text(container, body_selector);
    (title, description)
}

fn stripped_text(container: ElementRef<'_>, selector: &Selector) -> String {
    container
        .select(selector)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default()
}
