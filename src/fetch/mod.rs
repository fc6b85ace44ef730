//! Upstream guide fetching
//!
//! [`GuideFetcher`] performs one HTTP GET against the configured XMLTV
//! feed and parses the body into a [`GuideDocument`].
//! [`scheduler::FetchScheduler`] drives it on a fixed interval.

use reqwest::header::USER_AGENT;
use reqwest::Client;
use thiserror::Error;

use crate::config::FetchConfig;
use crate::guide::xmltv::parse_xmltv;
use crate::guide::GuideDocument;

pub mod scheduler;

pub use scheduler::{FetchScheduler, RetryPolicy};

/// Errors that can occur while fetching the guide feed
///
/// All variants are transient from the scheduler's point of view: the
/// attempt is logged and retried, never surfaced to request handlers.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP transport error (connect, body read, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-200 status
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Body was not a parseable XMLTV document
    #[error("invalid guide XML: {0}")]
    Parse(#[from] quick_xml::DeError),
}

/// HTTP fetcher for the XMLTV feed
pub struct GuideFetcher {
    client: Client,
    url: String,
    user_agent: String,
}

impl GuideFetcher {
    /// Create a fetcher from the fetch configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be built.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().gzip(true);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            url: config.upstream_url.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// Fetch and parse the feed once
    ///
    /// # Errors
    ///
    /// Any transport failure, non-200 status or parse failure.
    pub async fn fetch(&self) -> Result<GuideDocument, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let document = parse_xmltv(&body)?;

        tracing::debug!(
            channels = document.channels.len(),
            programmes = document.programmes.len(),
            "guide feed parsed"
        );

        Ok(document)
    }

    /// Upstream URL this fetcher targets
    pub fn url(&self) -> &str {
        &self.url
    }
}
