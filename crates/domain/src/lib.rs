//! Ferrous Lookup Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_list;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{MxRecord, RecordSet, RecordStatus, RecordType};
pub use domain_list::parse_domain_list;
pub use errors::DomainError;
