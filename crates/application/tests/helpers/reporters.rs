use ferrous_lookup_application::ports::ResolutionReporter;
use ferrous_lookup_domain::RecordSet;
use std::sync::Mutex;

#[derive(Default)]
pub struct CollectingReporter {
    started: Mutex<Vec<String>>,
    reports: Mutex<Vec<(String, RecordSet)>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started_domains(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }

    pub fn reports(&self) -> Vec<(String, RecordSet)> {
        self.reports.lock().unwrap().clone()
    }

    pub fn reported_domains(&self) -> Vec<String> {
        let mut domains: Vec<String> = self
            .reports
            .lock()
            .unwrap()
            .iter()
            .map(|(d, _)| d.clone())
            .collect();
        domains.sort();
        domains
    }
}

impl ResolutionReporter for CollectingReporter {
    fn started(&self, domain: &str) {
        self.started.lock().unwrap().push(domain.to_string());
    }

    fn report(&self, domain: &str, records: &RecordSet) {
        self.reports
            .lock()
            .unwrap()
            .push((domain.to_string(), records.clone()));
    }
}
