use async_trait::async_trait;
use ferrous_lookup_domain::{DomainError, MxRecord};
use std::net::IpAddr;

/// Stub resolver operations the resolver depends on.
///
/// Implementations return `DomainError::NoRecords` when the upstream answers
/// definitively with nothing (NXDOMAIN or NODATA) and another variant for
/// every other failure.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    async fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError>;

    /// Canonical name: the end of the CNAME chain, or the fully qualified
    /// domain itself when it has no CNAME.
    async fn lookup_cname(&self, domain: &str) -> Result<Vec<String>, DomainError>;

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DomainError>;

    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DomainError>;

    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, DomainError>;

    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError>;
}
