use super::{with_timeout, DEFAULT_QUERY_TIMEOUT_MS};
use crate::ports::{DnsLookup, RecordCachePort};
use crate::services::normalize_domain;
use ferrous_lookup_domain::{DomainError, RecordSet, RecordType};
use std::future::Future;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Resolves every supported record type for a domain, going through the cache.
///
/// Each record type is looked up independently. A failed or timed out lookup
/// only marks its own record type as failed; `execute` always produces a
/// record set, and that record set is cached even when every lookup failed.
pub struct ResolveDomainUseCase {
    lookup: Arc<dyn DnsLookup>,
    cache: Arc<dyn RecordCachePort>,
    query_timeout: Duration,
}

impl ResolveDomainUseCase {
    pub fn new(lookup: Arc<dyn DnsLookup>, cache: Arc<dyn RecordCachePort>) -> Self {
        Self {
            lookup,
            cache,
            query_timeout: Duration::from_millis(DEFAULT_QUERY_TIMEOUT_MS),
        }
    }

    pub fn with_query_timeout(mut self, timeout_ms: u64) -> Self {
        self.query_timeout = Duration::from_millis(timeout_ms);
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Arc<RecordSet> {
        let domain = normalize_domain(domain);

        if let Some(cached) = self.cache.get(&domain) {
            debug!(domain = %domain, "Cache HIT");
            return cached;
        }

        debug!(domain = %domain, "Cache MISS, querying all record types");

        let mut records = RecordSet::new();

        match with_timeout(self.query_timeout, self.lookup.lookup_ip(&domain)).await {
            Ok(addresses) => {
                let (v4, v6): (Vec<IpAddr>, Vec<IpAddr>) =
                    addresses.into_iter().partition(IpAddr::is_ipv4);
                records.insert(RecordType::A, to_strings(v4));
                records.insert(RecordType::AAAA, to_strings(v6));
            }
            Err(e) => record_error(&mut records, &domain, &[RecordType::A, RecordType::AAAA], e),
        }

        self.collect(&mut records, &domain, RecordType::CNAME, self.lookup.lookup_cname(&domain))
            .await;

        let mx = async { self.lookup.lookup_mx(&domain).await.map(to_strings) };
        self.collect(&mut records, &domain, RecordType::MX, mx).await;

        self.collect(&mut records, &domain, RecordType::TXT, self.lookup.lookup_txt(&domain))
            .await;
        self.collect(&mut records, &domain, RecordType::NS, self.lookup.lookup_ns(&domain))
            .await;

        debug!(
            domain = %domain,
            record_types = records.len(),
            failed = records.failures().count(),
            "Resolution complete"
        );

        let records = Arc::new(records);
        self.cache.put(&domain, Arc::clone(&records));
        records
    }

    async fn collect<F>(
        &self,
        records: &mut RecordSet,
        domain: &str,
        record_type: RecordType,
        lookup: F,
    ) where
        F: Future<Output = Result<Vec<String>, DomainError>>,
    {
        match with_timeout(self.query_timeout, lookup).await {
            Ok(values) => records.insert(record_type, values),
            Err(e) => record_error(records, domain, &[record_type], e),
        }
    }
}

fn record_error(
    records: &mut RecordSet,
    domain: &str,
    record_types: &[RecordType],
    error: DomainError,
) {
    for record_type in record_types {
        if error.is_no_records() {
            debug!(domain = %domain, record_type = %record_type, "No records found");
            records.insert(*record_type, Vec::new());
        } else {
            warn!(
                domain = %domain,
                record_type = %record_type,
                error = %error,
                "Error looking up records"
            );
            records.mark_failed(*record_type, error.to_string());
        }
    }
}

fn to_strings<T: ToString>(values: Vec<T>) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
