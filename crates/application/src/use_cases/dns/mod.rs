mod batch_resolve;
mod resolve_domain;
mod reverse_lookup;

pub use batch_resolve::{BatchResolveUseCase, BatchSummary};
pub use resolve_domain::ResolveDomainUseCase;
pub use reverse_lookup::ReverseLookupUseCase;

use ferrous_lookup_domain::DomainError;
use std::future::Future;
use std::time::Duration;

pub(crate) const DEFAULT_QUERY_TIMEOUT_MS: u64 = 5000;

/// Bounds a single lookup. Elapsed time turns into `DomainError::QueryTimeout`.
pub(crate) async fn with_timeout<T, F>(timeout: Duration, lookup: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(timeout, lookup).await {
        Ok(result) => result,
        Err(_) => Err(DomainError::QueryTimeout(
            u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        )),
    }
}
