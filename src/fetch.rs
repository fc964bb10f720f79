//! HTTP page fetching with rotating identities and linear backoff.
//!
//! # Architecture
//!
//! - [`PageFetch`]: one attempt at downloading a page body
//! - [`HttpFetch`]: the reqwest-backed implementation
//! - [`RetryFetch`]: decorator adding bounded retries, backoff and a polite
//!   delay to any [`PageFetch`]
//!
//! # Retry Strategy
//!
//! - Every failure (transport error or non-2xx status) is retryable
//! - Attempt `n` is followed by a wait of `n × backoff_step` (0.5s, 1.0s, 1.5s, …)
//! - After `max_attempts` failures the fetcher gives up and returns `None`

use crate::error::{Result, ScrapeError};
use rand::{rng, Rng};
use reqwest::Client;
use reqwest::header::USER_AGENT;
use scraper::Html;
use std::fmt;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, error, instrument, warn};

/// Browser identities rotated across requests.
pub const USER_AGENTS: [&str; 3] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0 Safari/537.36",
];

/// Default wait unit between failed attempts.
pub const DEFAULT_BACKOFF_STEP: Duration = Duration::from_millis(500);

/// Pick one identity independently at random.
pub fn random_user_agent() -> &'static str {
    USER_AGENTS[rng().random_range(0..USER_AGENTS.len())]
}

/// A single attempt at downloading a page.
///
/// Implementors never retry; [`RetryFetch`] owns that policy.
pub trait PageFetch {
    /// Download `url` and return its body, or an error describing why not.
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// [`PageFetch`] over a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetch {
    client: Client,
}

impl HttpFetch {
    /// Build a client whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl PageFetch for HttpFetch {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let user_agent = random_user_agent();
        debug!(%user_agent, "Issuing GET");
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response.text().await?)
    }
}

/// Decorator that retries a [`PageFetch`] with linear backoff.
///
/// ```text
/// delay after failed attempt n = backoff_step * n
/// ```
pub struct RetryFetch<T> {
    inner: T,
    max_attempts: usize,
    backoff_step: Duration,
}

impl<T> RetryFetch<T>
where
    T: PageFetch,
{
    /// Wrap `inner`, giving up after `max_attempts` consecutive failures.
    ///
    /// A `max_attempts` of zero is treated as one.
    pub fn new(inner: T, max_attempts: usize) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            backoff_step: DEFAULT_BACKOFF_STEP,
        }
    }

    /// Override the backoff unit.
    pub fn with_backoff_step(mut self, backoff_step: Duration) -> Self {
        self.backoff_step = backoff_step;
        self
    }

    /// Fetch `url` and parse it as an HTML document.
    ///
    /// On success, sleeps `polite_delay` before returning so the *next*
    /// request is throttled. Returns `None` once every attempt has failed;
    /// no error escapes this call.
    #[instrument(level = "info", skip(self, polite_delay))]
    pub async fn fetch_document(&self, url: &str, polite_delay: Duration) -> Option<Html> {
        let total_t0 = Instant::now();

        for attempt in 1..=self.max_attempts {
            match self.inner.fetch_page(url).await {
                Ok(body) => {
                    debug!(
                        attempt,
                        bytes = body.len(),
                        elapsed_ms_total = total_t0.elapsed().as_millis(),
                        "Fetched page"
                    );
                    if !polite_delay.is_zero() {
                        sleep(polite_delay).await;
                    }
                    return Some(Html::parse_document(&body));
                }
                Err(e) => {
                    let delay = self.backoff_step.saturating_mul(attempt as u32);
                    warn!(
                        attempt,
                        max = self.max_attempts,
                        ?delay,
                        error = %e,
                        "Fetch attempt failed; backing off"
                    );
                    sleep(delay).await;
                }
            }
        }

        error!(
            attempts = self.max_attempts,
            elapsed_ms_total = total_t0.elapsed().as_millis(),
            "Could not fetch HTML; giving up"
        );
        None
    }
}

impl<T> fmt::Debug for RetryFetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryFetch")
            .field("max_attempts", &self.max_attempts)
            .field("backoff_step", &self.backoff_step)
            .finish()
    }
}
