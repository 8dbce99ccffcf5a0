pub mod batch;
pub mod cache;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use batch::{BatchConfig, MAX_CONCURRENCY};
pub use cache::{CacheConfig, MAX_TTL_SECS};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
