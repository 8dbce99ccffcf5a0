use ferrous_lookup_domain::RecordSet;
use std::sync::Arc;

/// Port for the resolved record set cache, keyed by normalized domain.
pub trait RecordCachePort: Send + Sync {
    /// Returns `None` for absent and for expired entries.
    fn get(&self, domain: &str) -> Option<Arc<RecordSet>>;

    /// Inserts or replaces the entry for `domain`, restarting its TTL.
    fn put(&self, domain: &str, records: Arc<RecordSet>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
