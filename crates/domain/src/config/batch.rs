use serde::{Deserialize, Serialize};

/// Largest permit count a tokio semaphore accepts.
pub const MAX_CONCURRENCY: usize = usize::MAX >> 3;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Resolutions allowed in flight at once. 0 means unbounded.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
        }
    }
}

fn default_max_concurrency() -> usize {
    64
}
