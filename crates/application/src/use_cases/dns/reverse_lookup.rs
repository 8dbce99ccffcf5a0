use super::{with_timeout, DEFAULT_QUERY_TIMEOUT_MS};
use crate::ports::DnsLookup;
use ferrous_lookup_domain::DomainError;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// PTR lookup for a single address. Results are never cached.
pub struct ReverseLookupUseCase {
    lookup: Arc<dyn DnsLookup>,
    query_timeout: Duration,
}

impl ReverseLookupUseCase {
    pub fn new(lookup: Arc<dyn DnsLookup>) -> Self {
        Self {
            lookup,
            query_timeout: Duration::from_millis(DEFAULT_QUERY_TIMEOUT_MS),
        }
    }

    pub fn with_query_timeout(mut self, timeout_ms: u64) -> Self {
        self.query_timeout = Duration::from_millis(timeout_ms);
        self
    }

    /// Hostnames for `ip`, empty when the address is invalid, has no PTR
    /// records, or the lookup fails.
    #[instrument(skip(self))]
    pub async fn execute(&self, ip: &str) -> Vec<String> {
        let addr: IpAddr = match ip.trim().parse() {
            Ok(addr) => addr,
            Err(_) => {
                let e = DomainError::InvalidIpAddress(ip.to_string());
                warn!(error = %e, "Error during reverse DNS lookup");
                return Vec::new();
            }
        };

        match with_timeout(self.query_timeout, self.lookup.reverse_lookup(addr)).await {
            Ok(hostnames) => {
                debug!(ip = %addr, hostnames = hostnames.len(), "Reverse lookup complete");
                hostnames
            }
            Err(e) if e.is_no_records() => {
                debug!(ip = %addr, "Reverse lookup returned no records");
                Vec::new()
            }
            Err(e) => {
                warn!(ip = %addr, error = %e, "Error during reverse DNS lookup");
                Vec::new()
            }
        }
    }
}
