//! Single-slot guide cache
//!
//! Holds the current [`GuideDocument`] behind an atomic replace. The
//! fetch scheduler is the only writer; request handlers are arbitrarily
//! many concurrent readers. A reader either sees no document (before the
//! first successful refresh) or a complete one; a refresh swaps the
//! `Arc` as a whole, so a reader holding a clone keeps a consistent
//! snapshot across the swap.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::GuideDocument;

struct Slot {
    document: Arc<GuideDocument>,
    published_at: DateTime<Utc>,
}

/// Thread-safe store for the current guide document
#[derive(Default)]
pub struct GuideCache {
    slot: RwLock<Option<Slot>>,
}

/// Snapshot of the cache state, for the health endpoint
#[derive(Debug, Clone)]
pub struct CacheStatus {
    pub ready: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub channel_count: usize,
    pub programme_count: usize,
}

impl GuideCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the current document
    pub async fn publish(&self, document: GuideDocument) {
        let slot = Slot {
            document: Arc::new(document),
            published_at: Utc::now(),
        };
        *self.slot.write().await = Some(slot);
    }

    /// Current document, if any refresh has succeeded yet
    ///
    /// Never blocks on an in-flight fetch; the write lock is held only
    /// for the duration of the pointer swap in [`publish`](Self::publish).
    pub async fn current(&self) -> Option<Arc<GuideDocument>> {
        self.slot.read().await.as_ref().map(|s| Arc::clone(&s.document))
    }

    pub async fn is_ready(&self) -> bool {
        self.slot.read().await.is_some()
    }

    pub async fn status(&self) -> CacheStatus {
        match self.slot.read().await.as_ref() {
            Some(slot) => CacheStatus {
                ready: true,
                published_at: Some(slot.published_at),
                channel_count: slot.document.channels.len(),
                programme_count: slot.document.programmes.len(),
            },
            None => CacheStatus {
                ready: false,
                published_at: None,
                channel_count: 0,
                programme_count: 0,
            },
        }
    }
}
