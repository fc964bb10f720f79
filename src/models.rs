//! Data models for scraped fact-check listings.
//!
//! - [`Article`]: one listing pulled from a results page
//! - [`Label`]: the veracity class a whole run is filed under

use clap::ValueEnum;
use std::fmt;

/// A single fact-check listing as scraped from a results page.
///
/// `title` and `description` are empty strings when the listing carries no
/// matching element. `url` is always absolute and unique within one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// The listing headline.
    pub title: String,
    /// The teaser paragraph shown under the headline.
    pub description: String,
    /// Absolute URL of the full fact-check.
    pub url: String,
}

/// Veracity class attached to every article of a run.
///
/// The label names the output subdirectory and decides the binary
/// `veracidad` column of the CSV ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Label {
    /// Claims rated true.
    Verdad,
    /// Claims rated false.
    Falso,
}

impl Label {
    /// Directory name used by the text sink.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Verdad => "verdad",
            Label::Falso => "falso",
        }
    }

    /// `1` for true claims, `0` for false ones.
    pub fn veracity(&self) -> u8 {
        match self {
            Label::Verdad => 1,
            Label::Falso => 0,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_veracity_flag() {
        assert_eq!(Label::Verdad.veracity(), 1);
        assert_eq!(Label::Falso.veracity(), 0);
    }

    #[test]
    fn test_label_display_matches_directory_name() {
        assert_eq!(Label::Verdad.to_string(), "verdad");
        assert_eq!(Label::Falso.to_string(), "falso");
    }

    #[test]
    fn test_article_creation() {
        let article = Article {
            title: "Título".to_string(),
            description: String::new(),
            url: "https://colombiacheck.com/chequeos/1".to_string(),
        };
        assert_eq!(article.title, "Título");
        assert!(article.description.is_empty());
    }
}
