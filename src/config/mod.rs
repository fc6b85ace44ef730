//! Configuration management
//!
//! All settings load from environment variables with defaults matching
//! the deployed service; nothing here is required for a first run.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Default upstream XMLTV feed
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://cdn.jsdmirror.com/gh/dfdg881/myEPG@master/output/epg.xml";

/// User-Agent presented to the upstream CDN
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Guide fetching configuration
    pub fetch: FetchConfig,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Guide fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Upstream XMLTV feed URL
    pub upstream_url: String,

    /// User-Agent header sent with every fetch
    pub user_agent: String,

    /// Seconds between refreshes, measured from the end of the previous
    /// successful one
    pub refresh_interval_secs: u64,

    /// Base delay in milliseconds between failed fetch attempts
    /// (0 = immediate retry)
    pub retry_base_delay_ms: u64,

    /// Cap on the backoff delay in milliseconds
    pub retry_max_delay_ms: u64,

    /// Request timeout in seconds; unbounded when unset
    pub request_timeout_secs: Option<u64>,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the API server on
    pub bind_address: SocketAddr,

    /// Enable permissive CORS headers
    pub enable_cors: bool,

    /// Enable per-request tracing
    pub enable_request_logging: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            refresh_interval_secs: 60,
            retry_base_delay_ms: 0,
            retry_max_delay_ms: 30_000,
            request_timeout_secs: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:27100".parse().expect("valid default address"),
            enable_cors: true,
            enable_request_logging: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let upstream_url =
            std::env::var("ZHINAN_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.into());

        let user_agent =
            std::env::var("ZHINAN_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.into());

        let refresh_interval_secs = std::env::var("ZHINAN_REFRESH_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);

        let retry_base_delay_ms = std::env::var("ZHINAN_FETCH_RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        let retry_max_delay_ms = std::env::var("ZHINAN_FETCH_RETRY_MAX_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30_000);

        let request_timeout_secs = std::env::var("ZHINAN_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok());

        let bind_address = std::env::var("ZHINAN_BIND_ADDRESS")
            .ok()
            .and_then(|v| v.parse::<SocketAddr>().ok())
            .unwrap_or_else(|| ServerConfig::default().bind_address);

        let enable_cors = std::env::var("ZHINAN_ENABLE_CORS")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(true);

        let enable_request_logging = std::env::var("ZHINAN_REQUEST_LOGGING")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(true);

        let level = std::env::var("ZHINAN_LOG_LEVEL").unwrap_or_else(|_| "info".into());
        let format = std::env::var("ZHINAN_LOG_FORMAT").unwrap_or_else(|_| "text".into());

        Ok(Self {
            fetch: FetchConfig {
                upstream_url,
                user_agent,
                refresh_interval_secs,
                retry_base_delay_ms,
                retry_max_delay_ms,
                request_timeout_secs,
            },
            server: ServerConfig {
                bind_address,
                enable_cors,
                enable_request_logging,
            },
            logging: LoggingConfig { level, format },
        })
    }
}
