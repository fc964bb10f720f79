//! Error types shared by the fetcher, the site profile and the output sinks.
//!
//! Only persistence errors are expected to reach `main`. Fetch errors are
//! produced per attempt and absorbed by [`crate::fetch::RetryFetch`].

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport level failure: timeout, DNS, connection reset, body decode.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx status.
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid selector: {0}")]
    Selector(String),
}
