#![allow(dead_code)]

mod mock_dns_lookup;
mod mock_record_cache;
mod reporters;

pub use mock_dns_lookup::{LookupKind, MockDnsLookup};
pub use mock_record_cache::MockRecordCache;
pub use reporters::CollectingReporter;
