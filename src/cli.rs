//! Command-line interface definitions.
//!
//! All run parameters can be passed as flags; the numeric knobs and the
//! output directory can also come from environment variables.

use crate::models::Label;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments for the fact-check scraper.
///
/// # Examples
///
/// ```sh
/// # Defaults: 75 articles, up to 30 pages, label "falso"
/// factcheck_scraper
///
/// # True claims into a custom directory
/// factcheck_scraper --label verdad -o ./dataset --limit 20
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Maximum number of articles to collect
    #[arg(short, long, env = "SCRAPER_LIMIT", default_value_t = 75)]
    pub limit: usize,

    /// Maximum number of results pages to visit
    #[arg(short = 'p', long, env = "SCRAPER_MAX_PAGES", default_value_t = 30)]
    pub max_pages: usize,

    /// Seconds to wait after each fetch and between pages
    #[arg(short, long, env = "SCRAPER_DELAY", default_value = "2", value_parser = parse_seconds)]
    pub delay: Duration,

    /// Veracity label for every collected article
    #[arg(long, value_enum, ignore_case = true, default_value_t = Label::Falso)]
    pub label: Label,

    /// Portal name, used as file prefix and CSV `fuente` column
    #[arg(long, default_value = "colombiaCheck")]
    pub portal: String,

    /// Base output directory
    #[arg(short = 'o', long, env = "SCRAPER_BASE_DIR", default_value = "data_scraped")]
    pub base_dir: PathBuf,

    /// CSV ledger file name, inside the base directory
    #[arg(long, default_value = "noticiasColombiaCheck.csv")]
    pub csv_filename: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "15", value_parser = parse_seconds)]
    pub timeout: Duration,

    /// Attempts per page before giving up
    #[arg(long, default_value_t = 3)]
    pub max_attempts: usize,

    /// Backoff unit in seconds; failed attempt n waits n times this
    #[arg(long, default_value = "0.5", value_parser = parse_seconds)]
    pub backoff: Duration,
}

/// Parse a non-negative, possibly fractional, number of seconds.
pub fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("`{s}` is not a number: {e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|_| format!("`{s}` must be a finite, non-negative number of seconds"))
}
