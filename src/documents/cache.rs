//! Short-lived store for generated PDFs served through view links.
//!
//! Entries are valid until `ttl` after insertion, inclusive. Expired entries
//! are never returned; a background sweeper removes them from memory.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use moka::future::Cache;
use uuid::Uuid;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug)]
struct CacheEntry {
    bytes: Vec<u8>,
    filename: String,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now <= self.expires_at
    }
}

/// A cached document as handed back to the view route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
}

pub struct DocumentCache {
    entries: Cache<String, Arc<CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl DocumentCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        // Expiry is decided against `clock`; moka drops entries a second
        // after that so a live entry is never evicted early.
        let entries = Cache::builder()
            .time_to_live(ttl.to_std().unwrap_or_default() + std::time::Duration::from_secs(1))
            .build();

        Self { entries, ttl, clock }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store a document and return its fresh id.
    pub async fn put(&self, bytes: Vec<u8>, filename: impl Into<String>) -> String {
        let entry = Arc::new(CacheEntry {
            bytes,
            filename: filename.into(),
            expires_at: self.clock.now() + self.ttl,
        });

        let mut id = Uuid::new_v4().simple().to_string();
        while self.entries.contains_key(&id) {
            id = Uuid::new_v4().simple().to_string();
        }
        self.entries.insert(id.clone(), entry).await;
        id
    }

    /// The document stored under `id`, unless it is unknown or expired.
    pub async fn get(&self, id: &str) -> Option<CachedDocument> {
        let now = self.clock.now();
        self.entries
            .get(id)
            .await
            .filter(|entry| entry.is_live(now))
            .map(|entry| CachedDocument {
                bytes: entry.bytes.clone(),
                filename: entry.filename.clone(),
            })
    }

    /// Drop expired entries, returning how many were removed.
    pub async fn sweep(&self) -> usize {
        let now = self.clock.now();
        let expired: Vec<Arc<String>> = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.is_live(now))
            .map(|(id, _)| id)
            .collect();

        for id in &expired {
            self.entries.invalidate(id.as_str()).await;
        }
        self.entries.run_pending_tasks().await;
        expired.len()
    }

    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Sweep `cache` every `period` for as long as the runtime lives.
pub fn spawn_sweeper(cache: Arc<DocumentCache>, period: std::time::Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        log::info!("Document cache sweeper started (every {}s)", period.as_secs());
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = cache.sweep().await;
            if removed > 0 {
                log::debug!("Swept {} expired document(s), {} cached", removed, cache.len().await);
            }
        }
    })
}
