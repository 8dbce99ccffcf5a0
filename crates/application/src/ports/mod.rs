mod dns_lookup;
mod record_cache;
mod resolution_reporter;

pub use dns_lookup::DnsLookup;
pub use record_cache::RecordCachePort;
pub use resolution_reporter::ResolutionReporter;
