//! REST API handlers
//!
//! One data endpoint (`/json`) plus a health endpoint. The schedule
//! handler never errors for "no data": a
//! resolution miss serves the 未知频道 sentinel with the placeholder
//! schedule. Only an empty cache, before the first successful upstream
//! fetch, produces a non-200 response.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::guide::cache::CacheStatus;
use crate::schedule::{format_date_time, lookup_programmes, today_in_beijing, DaySchedule};

use super::AppState;

// ============================================================================
// API Types
// ============================================================================

/// Query parameters for the schedule endpoint
#[derive(Debug, Default, Deserialize)]
pub struct EpgQuery {
    /// Channel name, free-form
    pub ch: Option<String>,

    /// Date, `YYYY-MM-DD` or `YYYYMMDD`
    pub date: Option<String>,
}

/// Error body for the unavailable-cache case
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub guide_ready: bool,
    pub channel_count: usize,
    pub programme_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_published_at: Option<String>,
}

impl HealthResponse {
    fn new(uptime_secs: u64, cache: &CacheStatus) -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_secs,
            guide_ready: cache.ready,
            channel_count: cache.channel_count,
            programme_count: cache.programme_count,
            guide_published_at: cache.published_at.map(|t| t.to_rfc3339()),
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/json", get(get_schedule))
        .route("/api/health", get(health_check))
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

/// Resolve a channel and serve its schedule for one date
async fn get_schedule(
    State(state): State<AppState>,
    Query(params): Query<EpgQuery>,
) -> impl IntoResponse {
    let channel = params
        .ch
        .unwrap_or_else(|| "CCTV1".to_string())
        .to_uppercase();
    let date_param = params.date.unwrap_or_else(today_in_beijing);
    let (date, _) = format_date_time(&date_param);

    let Some(guide) = state.cache.current().await else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "EPG data not available".to_string(),
            }),
        )
            .into_response();
    };

    let channel_name = state.resolver.resolve(&channel, &guide, &date);
    let epg_data = lookup_programmes(&channel_name, &guide, &date);

    tracing::debug!(
        query = %channel,
        resolved = %channel_name,
        date = %date,
        entries = epg_data.len(),
        "schedule served"
    );

    Json(DaySchedule {
        date,
        channel_name,
        epg_data,
    })
    .into_response()
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().as_secs();
    let cache = state.cache.status().await;
    Json(HealthResponse::new(uptime, &cache))
}
