//! # Fact-check Scraper
//!
//! Collects fact-check listings from ColombiaCheck and files them as a labelled
//! dataset: one text file per article plus a shared CSV ledger.
//!
//! ## Usage
//!
//! ```sh
//! factcheck_scraper --label falso --limit 75 -o ./data_scraped
//! ```
//!
//! ## Architecture
//!
//! The application runs one sequential pipeline:
//! 1. **Fetching**: download results pages with retries, backoff and polite delays
//! 2. **Collecting**: extract listings, deduplicate by URL, stop at the limit
//! 3. **Output**: write per-article text files and append to the CSV ledger

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod collect;
mod error;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use collect::{collect, CollectOptions};
use fetch::{HttpFetch, RetryFetch};
use outputs::{articles, ledger};
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("factcheck_scraper starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Fail before any network traffic if the output dir is unusable
    if let Err(e) = ensure_writable_dir(&args.base_dir).await {
        error!(
            path = %args.base_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Collect ----
    let site = scrapers::colombiacheck::profile()?;
    let fetcher = RetryFetch::new(HttpFetch::new(args.timeout)?, args.max_attempts)
        .with_backoff_step(args.backoff);
    let options = CollectOptions {
        limit: args.limit,
        max_pages: args.max_pages,
        delay: args.delay,
    };
    let collected = collect(&fetcher, &site, &options).await;
    info!(count = collected.len(), site = site.name, "Collected articles");

    // ---- Output ----
    let text_dir =
        articles::save_articles(&collected, args.label, &args.portal, &args.base_dir).await?;
    let ledger_path = ledger::append_articles(
        &collected,
        args.label,
        &args.portal,
        &args.base_dir,
        &args.csv_filename,
    )?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        articles = collected.len(),
        text_dir = %text_dir.display(),
        ledger = %ledger_path.display(),
        "Execution complete"
    );
    println!("\nSe extrajeron {} noticias de {}.", collected.len(), site.name);

    Ok(())
}
