use serde::{Deserialize, Serialize};

/// One week.
pub const MAX_TTL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Seconds a resolved record set is served from the cache, at most `MAX_TTL_SECS`.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Least-recently-used entries are evicted past this size.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    600
}

fn default_max_entries() -> usize {
    10_000
}
