use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    /// NXDOMAIN or NODATA. The lookup itself succeeded.
    #[error("No records found for {0}")]
    NoRecords(String),

    #[error("Query timeout after {0}ms")]
    QueryTimeout(u64),

    #[error("DNS lookup failed: {0}")]
    LookupFailed(String),

    #[error("Failed to initialize resolver: {0}")]
    ResolverInit(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// True when the upstream answered definitively with zero records.
    pub fn is_no_records(&self) -> bool {
        matches!(self, DomainError::NoRecords(_))
    }
}
