use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsLookup;
use ferrous_lookup_domain::{DomainError, MxRecord};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Lookup stub that answers every query with fixed data and counts calls.
#[derive(Default)]
pub struct CountingLookup {
    calls: AtomicUsize,
    ip_calls: AtomicUsize,
    delay: Option<Duration>,
}

impl CountingLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of address lookups, i.e. resolutions that missed the cache.
    pub fn ip_calls(&self) -> usize {
        self.ip_calls.load(Ordering::SeqCst)
    }

    async fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl DnsLookup for CountingLookup {
    async fn lookup_ip(&self, _domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.ip_calls.fetch_add(1, Ordering::SeqCst);
        self.hit().await;
        Ok(vec!["192.0.2.10".parse().unwrap(), "2001:db8::10".parse().unwrap()])
    }

    async fn lookup_cname(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.hit().await;
        Ok(vec![format!("{}.", domain)])
    }

    async fn lookup_mx(&self, _domain: &str) -> Result<Vec<MxRecord>, DomainError> {
        self.hit().await;
        Ok(vec![MxRecord::new("mx.example.com.", 5)])
    }

    async fn lookup_txt(&self, _domain: &str) -> Result<Vec<String>, DomainError> {
        self.hit().await;
        Err(DomainError::LookupFailed("SERVFAIL".to_string()))
    }

    async fn lookup_ns(&self, _domain: &str) -> Result<Vec<String>, DomainError> {
        self.hit().await;
        Ok(vec!["ns.example.com.".to_string()])
    }

    async fn reverse_lookup(&self, _ip: IpAddr) -> Result<Vec<String>, DomainError> {
        self.hit().await;
        Ok(Vec::new())
    }
}
