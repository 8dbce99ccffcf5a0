pub mod lookup;
pub mod record_cache;

pub use lookup::{canonical_name, HickoryDnsLookup};
pub use record_cache::InMemoryRecordCache;
