use ferrous_lookup_application::ports::RecordCachePort;
use ferrous_lookup_domain::config::CacheConfig;
use ferrous_lookup_domain::RecordSet;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct CacheEntry {
    records: Arc<RecordSet>,
    /// `None` when the TTL reaches past the clock's range.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |expires_at| now <= expires_at)
    }
}

/// Record set cache behind a single mutex.
///
/// Entries expire `ttl` after insertion. Expired entries are dropped when a
/// read observes them, and the least recently used entry is evicted once
/// `max_entries` is reached, so memory stays bounded for long-running
/// processes. The lock is held for map access only.
pub struct InMemoryRecordCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl InMemoryRecordCache {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);

        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries, Duration::from_secs(config.ttl_secs))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // Writers only swap whole entries, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, LruCache<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordCachePort for InMemoryRecordCache {
    fn get(&self, domain: &str) -> Option<Arc<RecordSet>> {
        let now = Instant::now();
        let mut entries = self.lock();

        match entries.get(domain) {
            Some(entry) if entry.is_fresh(now) => return Some(Arc::clone(&entry.records)),
            Some(_) => {}
            None => return None,
        }

        entries.pop(domain);
        debug!(domain = %domain, "Cache entry expired");
        None
    }

    fn put(&self, domain: &str, records: Arc<RecordSet>) {
        let entry = CacheEntry {
            records,
            expires_at: Instant::now().checked_add(self.ttl),
        };

        let evicted = self.lock().push(domain.to_string(), entry);
        if let Some((evicted_domain, _)) = evicted.filter(|(key, _)| key != domain) {
            debug!(domain = %evicted_domain, "Cache full, evicted least recently used entry");
        }
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
