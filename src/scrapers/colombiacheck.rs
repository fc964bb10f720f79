//! ColombiaCheck fact-check listing scraper.
//!
//! Results live at `https://colombiacheck.com/chequeos?page=N`. Each listing is
//! a `div.Chequeo.Chequeo-fila` card; older layouts nest `.Chequeo` cards in a
//! `div.view-content`, which is kept as the fallback strategy.

use super::{create_selector, SiteProfile};
use crate::error::Result;

pub const BASE_ORIGIN: &str = "https://colombiacheck.com";
pub const PAGE_TEMPLATE: &str = "https://colombiacheck.com/chequeos?page={page}";

pub const PRIMARY_LISTING: &str = "div.Chequeo.Chequeo-fila";
pub const FALLBACK_LISTING: &str = "div.view-content .Chequeo";
pub const LINK: &str = "a";
pub const TITLE: &str = "h3.Chequeo-texto-titulo";
pub const BODY: &str = "p.Chequeo-texto-parrafo";

/// Build the ColombiaCheck [`SiteProfile`].
pub fn profile() -> Result<SiteProfile> {
    Ok(SiteProfile {
        name: "ColombiaCheck",
        base_origin: BASE_ORIGIN,
        page_template: PAGE_TEMPLATE,
        listing_selectors: vec![
            create_selector(PRIMARY_LISTING)?,
            create_selector(FALLBACK_LISTING)?,
        ],
        link_selector: create_selector(LINK)?,
        title_selector: create_selector(TITLE)?,
        body_selector: create_selector(BODY)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_profile_builds() {
        let site = profile().unwrap();
        assert_eq!(site.listing_selectors.len(), 2);
        assert_eq!(site.name, "ColombiaCheck");
    }

    #[test]
    fn test_page_url() {
        let site = profile().unwrap();
        assert_eq!(site.page_url(1), "https://colombiacheck.com/chequeos?page=1");
        assert_eq!(site.page_url(12), "https://colombiacheck.com/chequeos?page=12");
    }

    #[test]
    fn test_resolve_relative_link() {
        let site = profile().unwrap();
        assert_eq!(
            site.resolve_link("/chequeos/123").as_deref(),
            Some("https://colombiacheck.com/chequeos/123")
        );
    }

    #[test]
    fn test_resolve_absolute_link_unchanged() {
        let site = profile().unwrap();
        assert_eq!(
            site.resolve_link("https://other.site/x").as_deref(),
            Some("https://other.site/x")
        );
    }

    #[test]
    fn test_resolve_empty_link() {
        let site = profile().unwrap();
        assert_eq!(site.resolve_link(""), None);
    }

    #[test]
    fn test_resolve_keeps_dot_segments() {
        let site = profile().unwrap();
        let dotted = site.resolve_link("/a/../chequeos/1").unwrap();
        let plain = site.resolve_link("/chequeos/1").unwrap();
        assert_eq!(dotted, "https://colombiacheck.com/a/../chequeos/1");
        assert_ne!(dotted, plain);
    }

    #[test]
    fn test_resolve_protocol_relative_stays_on_origin() {
        let site = profile().unwrap();
        assert_eq!(
            site.resolve_link("//other.site/x").as_deref(),
            Some("https://colombiacheck.com//other.site/x")
        );
    }

    #[test]
    fn test_resolve_non_http_scheme_is_prefixed() {
        let site = profile().unwrap();
        assert_eq!(
            site.resolve_link("mailto:x@y").as_deref(),
            Some("https://colombiacheck.commailto:x@y")
        );
    }

    #[test]
    fn test_primary_listing_selector() {
        let site = profile().unwrap();
        let doc = Html::parse_document(
            r#"<div class="Chequeo Chequeo-fila"><a href="/a">a</a></div>
               <div class="Chequeo Chequeo-fila"><a href="/b">b</a></div>
               <div class="view-content"><div class="Chequeo">c</div></div>"#,
        );
        assert_eq!(site.select_listings(&doc).len(), 2);
    }

    #[test]
    fn test_fallback_listing_selector() {
        let site = profile().unwrap();
        let doc = Html::parse_document(
            r#"<div class="view-content">
                 <div class="Chequeo"><a href="/a">a</a></div>
                 <div class="Chequeo"><a href="/b">b</a></div>
                 <div class="Chequeo"><a href="/c">c</a></div>
               </div>"#,
        );
        assert_eq!(site.select_listings(&doc).len(), 3);
    }

    #[test]
    fn test_no_listing_matches() {
        let site = profile().unwrap();
        let doc = Html::parse_document("<p>Mantenimiento</p>");
        assert!(site.select_listings(&doc).is_empty());
    }
}
