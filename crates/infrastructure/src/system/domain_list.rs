use ferrous_lookup_domain::{parse_domain_list, DomainError};
use std::path::Path;
use tracing::debug;

/// Reads a newline-delimited list of domains for batch resolution.
pub async fn read_domain_list(path: impl AsRef<Path>) -> Result<Vec<String>, DomainError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;

    let domains = parse_domain_list(&contents);
    debug!(path = %path.display(), domains = domains.len(), "Domain list loaded");
    Ok(domains)
}
