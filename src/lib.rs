//! zhinan - Chinese TV program guide service
//!
//! Resolves noisy, free-form channel names against a canonical channel
//! catalog and a periodically refreshed XMLTV guide, and serves the
//! matched channel's daily schedule as JSON.
//!
//! # Architecture
//!
//! - [`config`] - Configuration management and settings
//! - [`guide`] - Guide document model, XMLTV parsing, single-slot cache
//! - [`fetch`] - Upstream fetching and the periodic refresh scheduler
//! - [`resolve`] - Channel normalization and tiered fuzzy matching
//! - [`schedule`] - Programme lookup and date/time formatting
//! - [`server`] - axum API in front of it all
//!
//! # Example
//!
//! ```no_run
//! use zhinan::config::Config;
//! use zhinan::server::EpgServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = EpgServer::new(config);
//!     server
//!         .start_with_shutdown(async {
//!             let _ = tokio::signal::ctrl_c().await;
//!         })
//!         .await
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod guide;
pub mod resolve;
pub mod schedule;
pub mod server;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::fetch::{FetchScheduler, GuideFetcher, RetryPolicy};
    pub use crate::guide::{GuideCache, GuideDocument, Programme};
    pub use crate::resolve::{normalize_channel, ChannelResolver, UNKNOWN_CHANNEL};
    pub use crate::schedule::{lookup_programmes, DaySchedule, ProgrammeEntry};
    pub use crate::server::EpgServer;
}

// Direct re-exports for convenience
pub use guide::{GuideCache, GuideDocument, Programme};
pub use resolve::{ChannelResolver, UNKNOWN_CHANNEL};
