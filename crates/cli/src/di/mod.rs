use ferrous_lookup_application::use_cases::{
    BatchResolveUseCase, ResolveDomainUseCase, ReverseLookupUseCase,
};
use ferrous_lookup_domain::Config;
use ferrous_lookup_infrastructure::dns::{HickoryDnsLookup, InMemoryRecordCache};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct LookupServices {
    pub resolve: Arc<ResolveDomainUseCase>,
    pub batch: BatchResolveUseCase,
    pub reverse: ReverseLookupUseCase,
    pub shutdown: CancellationToken,
}

impl LookupServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let lookup = Arc::new(HickoryDnsLookup::from_system_config(&config.resolver)?);
        let cache = Arc::new(InMemoryRecordCache::from_config(&config.cache));
        let shutdown = CancellationToken::new();

        info!(
            ttl_secs = config.cache.ttl_secs,
            max_entries = config.cache.max_entries,
            max_concurrency = config.batch.max_concurrency,
            "Lookup services ready"
        );

        let resolve = Arc::new(
            ResolveDomainUseCase::new(lookup.clone(), cache)
                .with_query_timeout(config.resolver.query_timeout_ms),
        );

        Ok(Self {
            batch: BatchResolveUseCase::new(resolve.clone())
                .with_max_concurrency(config.batch.max_concurrency)
                .with_cancellation(shutdown.clone()),
            reverse: ReverseLookupUseCase::new(lookup)
                .with_query_timeout(config.resolver.query_timeout_ms),
            resolve,
            shutdown,
        })
    }
}
