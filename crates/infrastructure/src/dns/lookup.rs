use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsLookup;
use ferrous_lookup_domain::config::ResolverConfig;
use ferrous_lookup_domain::{DomainError, MxRecord};
use hickory_resolver::config::{LookupIpStrategy, ResolverOpts};
use hickory_resolver::proto::rr::{RData, Record, RecordType};
use hickory_resolver::{ResolveError, TokioResolver};
use std::net::IpAddr;
use std::time::Duration;
use tracing::{debug, info};

/// `DnsLookup` backed by hickory, configured from the host's stub resolver
/// settings (`/etc/resolv.conf` on Unix, the registry on Windows).
pub struct HickoryDnsLookup {
    resolver: TokioResolver,
}

impl HickoryDnsLookup {
    pub fn new(resolver: TokioResolver) -> Self {
        Self { resolver }
    }

    pub fn from_system_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let mut builder = TokioResolver::builder_tokio()
            .map_err(|e| DomainError::ResolverInit(e.to_string()))?;
        Self::tune_options(builder.options_mut(), config);
        let resolver = builder.build();

        info!(
            timeout_ms = config.query_timeout_ms,
            attempts = config.attempts,
            "System stub resolver initialized"
        );

        Ok(Self::new(resolver))
    }

    /// Applies the configured limits on top of the options read from the host
    /// (ndots, search list, ...), which are left untouched. Both A and AAAA
    /// are always queried.
    pub fn tune_options(opts: &mut ResolverOpts, config: &ResolverConfig) {
        opts.timeout = Duration::from_millis(config.query_timeout_ms);
        opts.attempts = config.attempts;
        opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    }

    fn map_error(target: &str, record_type: &str, error: ResolveError) -> DomainError {
        if error.is_no_records_found() {
            debug!(query = %target, record_type, "No records found (NXDOMAIN/NODATA)");
            DomainError::NoRecords(target.to_string())
        } else {
            DomainError::LookupFailed(format!("{} {}: {}", record_type, target, error))
        }
    }
}

#[async_trait]
impl DnsLookup for HickoryDnsLookup {
    async fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        let lookup = self
            .resolver
            .lookup_ip(domain)
            .await
            .map_err(|e| Self::map_error(domain, "A/AAAA", e))?;

        Ok(lookup.iter().collect())
    }

    async fn lookup_cname(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        // Same query as `lookup_ip`; served from hickory's answer cache when warm.
        let lookup = self
            .resolver
            .lookup_ip(domain)
            .await
            .map_err(|e| Self::map_error(domain, "CNAME", e))?;

        Ok(vec![canonical_name(domain, lookup.as_lookup().records())])
    }

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DomainError> {
        let lookup = self
            .resolver
            .mx_lookup(domain)
            .await
            .map_err(|e| Self::map_error(domain, "MX", e))?;

        Ok(lookup
            .iter()
            .map(|mx| MxRecord::new(mx.exchange().to_string(), mx.preference()))
            .collect())
    }

    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        let lookup = self
            .resolver
            .txt_lookup(domain)
            .await
            .map_err(|e| Self::map_error(domain, "TXT", e))?;

        // A TXT record is a list of character-strings; they are joined into one value.
        Ok(lookup
            .iter()
            .map(|txt| {
                txt.txt_data()
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk))
                    .collect::<String>()
            })
            .collect())
    }

    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        let lookup = self
            .resolver
            .ns_lookup(domain)
            .await
            .map_err(|e| Self::map_error(domain, "NS", e))?;

        Ok(lookup.iter().map(|ns| ns.0.to_string()).collect())
    }

    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        let target = ip.to_string();
        let lookup = self
            .resolver
            .reverse_lookup(ip)
            .await
            .map_err(|e| Self::map_error(&target, "PTR", e))?;

        Ok(lookup.iter().map(|ptr| ptr.0.to_string()).collect())
    }
}

/// Canonical name of `domain` according to an address answer.
///
/// That is the owner of the address records, or the target of the last CNAME
/// in the chain when no address record is present. A domain with no CNAME is
/// its own canonical name, rendered fully qualified.
pub fn canonical_name(domain: &str, answers: &[Record]) -> String {
    answers
        .iter()
        .find(|record| matches!(record.record_type(), RecordType::A | RecordType::AAAA))
        .map(|record| record.name().to_string())
        .or_else(|| {
            answers.iter().rev().find_map(|record| match record.data() {
                RData::CNAME(cname) => Some(cname.0.to_string()),
                _ => None,
            })
        })
        .unwrap_or_else(|| format!("{}.", domain.trim_end_matches('.')))
}
