use crate::domain::model::{PlanResult, SessionId};
use crate::domain::ports::ResultStore;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct StoredResult {
    result: PlanResult,
    stored_at: Instant,
}

/// Bounded, in-process store for results awaiting their redirect.
pub struct InMemoryResultStore {
    entries: Mutex<LruCache<SessionId, StoredResult>>,
    ttl: Duration,
}

impl InMemoryResultStore {
    pub fn new(capacity: NonZeroUsize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn put(&self, session: SessionId, result: PlanResult) {
        let mut entries = self.entries.lock().await;
        if let Some((evicted, _)) = entries.push(
            session,
            StoredResult {
                result,
                stored_at: Instant::now(),
            },
        ) {
            if evicted != session {
                tracing::debug!("Evicted unread result for session {}", evicted);
            }
        }
    }

    async fn take(&self, session: SessionId) -> Option<PlanResult> {
        let stored = self.entries.lock().await.pop(&session)?;
        if stored.stored_at.elapsed() > self.ttl {
            tracing::debug!("Discarding expired result for session {}", session);
            return None;
        }
        Some(stored.result)
    }
}
