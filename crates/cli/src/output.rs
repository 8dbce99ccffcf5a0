use ferrous_lookup_application::ports::ResolutionReporter;
use ferrous_lookup_domain::RecordSet;
use std::fmt::Write as _;
use std::io::{self, Write};
use tracing::debug;

pub fn format_records(domain: &str, records: &RecordSet) -> String {
    let mut out = format!("DNS Records for {}:\n", domain);
    for (record_type, values) in records.iter() {
        let _ = writeln!(out, "{} Records:", record_type);
        for value in values {
            let _ = writeln!(out, " - {}", value);
        }
    }
    out
}

pub fn format_reverse(hostnames: &[String]) -> String {
    let mut out = String::from("Reverse DNS:\n");
    for host in hostnames {
        let _ = writeln!(out, " - {}", host);
    }
    out
}

/// Writes a whole block under one stdout lock so concurrent batch results
/// never interleave.
pub fn emit(block: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(block.as_bytes()).and_then(|_| stdout.flush()) {
        debug!(error = %e, "Failed to write to stdout");
    }
}

pub struct ConsoleReporter;

impl ResolutionReporter for ConsoleReporter {
    fn started(&self, domain: &str) {
        debug!(domain = %domain, "Resolving");
    }

    fn report(&self, domain: &str, records: &RecordSet) {
        emit(&format_records(domain, records));
    }
}
