//! Periodic guide refresh
//!
//! One long-lived task fetches the feed, publishes the parsed document to
//! the [`GuideCache`], sleeps the refresh interval, and repeats. The
//! interval is measured from the end of the previous successful refresh.
//! Failed attempts are retried indefinitely; the delay between failed
//! attempts comes from an explicit [`RetryPolicy`] rather than being
//! hard-coded, so deployments can trade the upstream's recovery latency
//! against request pressure.

use std::sync::Arc;
use std::time::Duration;

use crate::guide::GuideCache;

use super::{FetchError, GuideFetcher};

/// Delay between failed fetch attempts
///
/// The default is immediate retry (zero delay), which mirrors the
/// original service's behavior of hammering the upstream until it
/// recovers. Setting a base delay turns on exponential backoff capped at
/// `max_delay`.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Delay before the first retry
    pub base_delay: Duration,

    /// Upper bound on the delay between attempts
    pub max_delay: Duration,

    /// Multiplier applied per failed attempt
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::immediate()
    }
}

impl RetryPolicy {
    /// Retry without any delay
    pub fn immediate() -> Self {
        Self {
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            backoff_multiplier: 2.0,
        }
    }

    /// Exponential backoff starting at `base_delay`, capped at `max_delay`
    pub fn backoff(base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            base_delay,
            max_delay,
            backoff_multiplier: 2.0,
        }
    }

    /// Delay to apply after the given failed attempt (0-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        if self.base_delay.is_zero() {
            return Duration::ZERO;
        }
        let millis = self.base_delay.as_millis() as f64
            * self.backoff_multiplier.powi(attempt.min(16) as i32);
        Duration::from_millis(millis as u64).min(self.max_delay)
    }
}

/// Background driver that keeps the guide cache fresh
pub struct FetchScheduler {
    fetcher: GuideFetcher,
    cache: Arc<GuideCache>,
    refresh_interval: Duration,
    retry: RetryPolicy,
}

impl FetchScheduler {
    pub fn new(
        fetcher: GuideFetcher,
        cache: Arc<GuideCache>,
        refresh_interval: Duration,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            fetcher,
            cache,
            refresh_interval,
            retry,
        }
    }

    /// Run the refresh loop forever
    ///
    /// Each cycle blocks until a fetch succeeds, publishes the document,
    /// then sleeps the refresh interval before starting the next cycle.
    pub async fn run(self) {
        loop {
            self.refresh_until_success().await;
            tokio::time::sleep(self.refresh_interval).await;
        }
    }

    /// Retry the fetch until it succeeds, then publish
    ///
    /// Fetch failures are swallowed and logged here and nowhere else;
    /// no failure propagates to request handlers.
    pub async fn refresh_until_success(&self) {
        let mut attempt: u32 = 0;
        loop {
            match self.refresh_once().await {
                Ok(()) => return,
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt,
                        error = %e,
                        url = self.fetcher.url(),
                        "guide fetch failed, retrying"
                    );
                    let delay = self.retry.delay_for(attempt);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt = attempt.saturating_add(1);
                }
            }
        }
    }

    /// Perform a single fetch-and-publish cycle
    ///
    /// # Errors
    ///
    /// Returns the fetch error without retrying; `refresh_until_success`
    /// wraps this with the retry policy.
    pub async fn refresh_once(&self) -> Result<(), FetchError> {
        let document = self.fetcher.fetch().await?;
        tracing::info!(
            channels = document.channels.len(),
            programmes = document.programmes.len(),
            "guide data updated"
        );
        self.cache.publish(document).await;
        Ok(())
    }
}
