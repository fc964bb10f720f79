//! Pagination loop: fetch results pages, extract listings, deduplicate by URL.
//!
//! The loop stops when any of these holds:
//! - `limit` articles have been collected
//! - `max_pages` pages have been visited
//! - a page could not be fetched after all retries
//! - a page yields no listing containers under any strategy
//!
//! A stop for the last two reasons is not an error; the articles gathered so
//! far are returned.

use crate::fetch::{PageFetch, RetryFetch};
use crate::models::Article;
use crate::scrapers::{extract_fields, SiteProfile};
use crate::utils::truncate_for_log;
use scraper::Html;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Knobs for one collection run.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Maximum number of articles to return.
    pub limit: usize,
    /// Maximum number of results pages to visit.
    pub max_pages: usize,
    /// Polite delay, applied after every fetch and again between pages.
    pub delay: Duration,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            limit: 75,
            max_pages: 30,
            delay: Duration::from_secs(2),
        }
    }
}

/// Walk the site's results pages and gather up to `options.limit` articles.
///
/// Articles keep document order across pages; the first occurrence of a URL
/// wins.
#[instrument(level = "info", skip_all, fields(site = site.name, limit = options.limit, max_pages = options.max_pages))]
pub async fn collect<T: PageFetch>(
    fetcher: &RetryFetch<T>,
    site: &SiteProfile,
    options: &CollectOptions,
) -> Vec<Article> {
    let mut articles: Vec<Article> = Vec::new();
    let mut seen_urls: HashSet<String> = HashSet::new();
    let mut page = 1usize;

    while articles.len() < options.limit && page <= options.max_pages {
        let url = site.page_url(page);

        let containers = {
            let Some(document) = fetcher.fetch_document(&url, options.delay).await else {
                info!(page, %url, "Stopping: page could not be fetched");
                break;
            };
            harvest_page(&document, site, options.limit, &mut seen_urls, &mut articles)
        };

        if containers == 0 {
            info!(page, "No fact-check listings found on page; stopping");
            break;
        }

        info!(page, containers, total = articles.len(), "Processed results page");
        page += 1;
        if !options.delay.is_zero() {
            sleep(options.delay).await;
        }
    }

    info!(count = articles.len(), "Collection finished");
    articles
}

/// Extract new articles from one parsed page into `articles`.
///
/// Returns the number of listing containers the page offered, before
/// deduplication. Processing stops early once `limit` is reached.
fn harvest_page(
    document: &Html,
    site: &SiteProfile,
    limit: usize,
    seen_urls: &mut HashSet<String>,
    articles: &mut Vec<Article>,
) -> usize {
    let containers = site.select_listings(document);

    for container in &containers {
        let Some(anchor) = container.select(&site.link_selector).next() else {
            debug!("Listing without a link; skipping");
            continue;
        };

        let href = anchor.value().attr("href").unwrap_or_default();
        let Some(link) = site.resolve_link(href) else {
            continue;
        };
        if !seen_urls.insert(link.clone()) {
            debug!(url = %link, "Duplicate listing; skipping");
            continue;
        }

        let (title, description) =
            extract_fields(*container, &site.title_selector, &site.body_selector);
        debug!(url = %link, title = %truncate_for_log(&title, 80), "Extracted listing");
        articles.push(Article {
            title,
            description,
            url: link,
        });

        if articles.len() >= limit {
            break;
        }
    }

    containers.len()
}
