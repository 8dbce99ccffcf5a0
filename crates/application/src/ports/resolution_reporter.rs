use ferrous_lookup_domain::RecordSet;

/// Receives batch results as each resolution finishes.
pub trait ResolutionReporter: Send + Sync {
    fn started(&self, _domain: &str) {}

    fn report(&self, domain: &str, records: &RecordSet);
}
