//! HTTP server
//!
//! Wires the guide cache, the resolver and the fetch scheduler together
//! behind an axum router. The scheduler runs as a background task owned
//! by the server; request handlers only ever take an atomic read of the
//! cache.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::fetch::{FetchError, FetchScheduler, GuideFetcher, RetryPolicy};
use crate::guide::GuideCache;
use crate::resolve::{ChannelResolver, TableUnifier};

pub mod api;

use api::create_router;

// ============================================================================
// App State
// ============================================================================

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Guide cache, written only by the fetch scheduler
    pub cache: Arc<GuideCache>,

    /// Channel resolver over the canonical catalog
    pub resolver: Arc<ChannelResolver>,

    /// Server start time
    pub start_time: Instant,
}

// ============================================================================
// EPG Server
// ============================================================================

/// Main EPG query server
pub struct EpgServer {
    config: Config,
    state: AppState,
}

impl EpgServer {
    /// Create a new server from configuration
    pub fn new(config: Config) -> Self {
        let cache = Arc::new(GuideCache::new());
        let resolver = Arc::new(ChannelResolver::new(Arc::new(TableUnifier)));

        let state = AppState {
            cache,
            resolver,
            start_time: Instant::now(),
        };

        Self { config, state }
    }

    /// Get the application state
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Build the router with all routes and layers
    pub fn build_router(&self) -> Router {
        let mut router = create_router(self.state.clone());

        if self.config.server.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        if self.config.server.enable_request_logging {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Spawn the background refresh task
    ///
    /// # Errors
    ///
    /// Returns a fetch error only if the HTTP client cannot be built;
    /// fetch failures at runtime stay inside the scheduler.
    pub fn start_background_tasks(&self) -> Result<(), FetchError> {
        let fetcher = GuideFetcher::new(&self.config.fetch)?;
        let retry = if self.config.fetch.retry_base_delay_ms == 0 {
            RetryPolicy::immediate()
        } else {
            RetryPolicy::backoff(
                std::time::Duration::from_millis(self.config.fetch.retry_base_delay_ms),
                std::time::Duration::from_millis(self.config.fetch.retry_max_delay_ms),
            )
        };
        let scheduler = FetchScheduler::new(
            fetcher,
            Arc::clone(&self.state.cache),
            std::time::Duration::from_secs(self.config.fetch.refresh_interval_secs),
            retry,
        );

        tokio::spawn(scheduler.run());
        tracing::info!(
            url = %self.config.fetch.upstream_url,
            interval_secs = self.config.fetch.refresh_interval_secs,
            "guide refresh task started"
        );
        Ok(())
    }

    /// Start the server with graceful shutdown
    ///
    /// # Errors
    ///
    /// Fails on client construction, bind or serve errors.
    pub async fn start_with_shutdown(
        &self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        self.start_background_tasks()?;

        let router = self.build_router();
        let addr = self.config.server.bind_address;

        tracing::info!("Starting EPG server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        tracing::info!("EPG server shutdown complete");
        Ok(())
    }
}
