use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Upper bound for every single lookup, in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Attempts the stub resolver makes per query before giving up.
    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            attempts: default_attempts(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_attempts() -> usize {
    2
}
